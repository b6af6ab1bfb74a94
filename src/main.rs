#[tokio::main]
async fn main() {
    ecoenergy_backend::run().await;
}
