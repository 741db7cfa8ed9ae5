//! Async encoding example using tokio.
//!
//! Run with:
//!     cargo run --example encode_async --features async-io -- /path/to/file

use std::env;

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;
use yencrs::{EncodeConfig, encode_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Encoding file: {}\n", path);

    let file = tokio::fs::File::open(&path).await?;
    let total_size = file.metadata().await?.len();

    let config = EncodeConfig::default()
        .with_part_size(500 * 1024)
        .with_file_name(path.as_str());
    let mut stream = encode_async(file.compat(), total_size, config)?;

    let mut total_parts = 0;
    while let Some(part) = stream.next().await {
        let part = part?;
        total_parts += 1;
        println!(
            "Part {}/{}: raw {}..={}, {} encoded bytes",
            part.part_num,
            part.part_total,
            part.start_byte,
            part.end_byte,
            part.len(),
        );
    }

    println!("\nTotal: {} parts", total_parts);

    Ok(())
}
