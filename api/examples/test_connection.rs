use apiconn_api::{ApiConnector, Segment};
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let (Ok(address), Ok(port)) = (env::var("APICONN_ADDRESS"), env::var("APICONN_PORT")) else {
        eprintln!("Error: APICONN_ADDRESS and APICONN_PORT must be set.");
        eprintln!("Create a .env file with:");
        eprintln!("APICONN_ADDRESS=localhost");
        eprintln!("APICONN_PORT=8080");
        eprintln!("APICONN_PATH=api\n");
        return;
    };
    let path = env::var("APICONN_PATH").unwrap_or_default();

    let connector = ApiConnector::new(address, port, path);
    let segments: Vec<String> = env::args().skip(1).collect();
    let segments: Vec<Segment<'_>> = segments.iter().map(|s| s as Segment<'_>).collect();

    println!("Fetching {}...\n", connector.request_url(&segments));

    match connector.get_data(&segments).await {
        Ok(value) => {
            println!("{:#}", value);
        }
        Err(e) => {
            eprintln!("Error fetching data ({}): {}", e.kind().name(), e);
        }
    }
}
