#[tokio::main]
async fn main() {
    screening_backend::run().await;
}
