#[tokio::main]
async fn main() -> anyhow::Result<()> {
    reelscout_lib::run().await
}
