pub fn run() -> anyhow::Result<()> {
    println!("emscribe {}", env!("CARGO_PKG_VERSION"));
    println!("Acquisition-activity segmentation for microscopy sessions");
    Ok(())
}
