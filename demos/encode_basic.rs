//! Basic synchronous encoding example.
//!
//! Run with:
//!     cargo run --example encode_basic

use yencrs::{EncodeConfig, Encoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some sample data
    let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();

    let config = EncodeConfig::default()
        .with_part_size(16 * 1024)
        .with_file_name("sample.bin");
    let encoder = Encoder::new(config);

    println!("Encoding {} bytes of data...\n", data.len());

    let parts = encoder.encode_bytes(data)?;

    for part in &parts {
        print!(
            "Part {}/{}: raw {}..={} ({} bytes), {} encoded bytes, pcrc32={:08x}",
            part.part_num,
            part.part_total,
            part.start_byte,
            part.end_byte,
            part.part_size,
            part.len(),
            part.pcrc32,
        );
        if let Some(crc32) = part.crc32 {
            print!(", crc32={:08x}", crc32);
        }
        println!();
    }

    let encoded_total: usize = parts.iter().map(|p| p.len()).sum();
    println!("\nTotal: {} parts, {} encoded bytes", parts.len(), encoded_total);

    Ok(())
}
