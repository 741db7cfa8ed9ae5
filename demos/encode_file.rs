//! File encoding example with streaming delivery.
//!
//! Run with:
//!     cargo run --example encode_file -- /path/to/file

use std::env;

use yencrs::{EncodeConfig, Encoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Encoding file: {}\n", path);

    // Usenet-style part sizing
    let config = EncodeConfig::default().with_part_size(500 * 1024);
    let encoder = Encoder::new(config);

    // The sink is called per part; nothing is accumulated
    let mut total_parts = 0;
    let mut encoded_bytes = 0;
    encoder.encode_path_with(&path, |part| {
        total_parts += 1;
        encoded_bytes += part.len();
        println!(
            "Part {:>3}/{}: raw {:>10}..={:<10} pcrc32={:08x}{}",
            part.part_num,
            part.part_total,
            part.start_byte,
            part.end_byte,
            part.pcrc32,
            match part.crc32 {
                Some(crc32) => format!(" crc32={:08x}", crc32),
                None => String::new(),
            },
        );
    })?;

    println!("\nTotal: {} parts, {} encoded bytes", total_parts, encoded_bytes);

    Ok(())
}
