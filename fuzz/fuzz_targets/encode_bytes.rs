#![no_main]

use libfuzzer_sys::fuzz_target;
use yencrs::{EncodeConfig, Encoder};

fn decode(encoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut iter = encoded.iter().copied();
    while let Some(byte) = iter.next() {
        match byte {
            0x0D | 0x0A => continue,
            0x3D => {
                let escaped = iter.next().expect("dangling escape marker");
                out.push(escaped.wrapping_sub(64).wrapping_sub(42));
            }
            _ => out.push(byte.wrapping_sub(42)),
        }
    }
    out
}

fuzz_target!(|data: Vec<u8>| {
    // Test with various part and line sizes
    let configs = vec![
        EncodeConfig::new(1, 1).unwrap(),
        EncodeConfig::new(7, 13).unwrap(),
        EncodeConfig::new(128, 128).unwrap(),
        EncodeConfig::new(4096, 64).unwrap(),
        EncodeConfig::default(),
    ];

    for config in configs {
        let line_width = config.line_width();
        let encoder = Encoder::new(config.with_file_name("fuzz.bin"));
        let parts = encoder.encode_bytes(data.clone()).unwrap();

        // Verify: empty input produces no parts, otherwise ranges tile the source
        if data.is_empty() {
            assert!(parts.is_empty());
            continue;
        }

        let mut expected_start = 1u64;
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(part.part_num as usize, i + 1);
            assert_eq!(part.part_total as usize, parts.len());
            assert_eq!(part.start_byte, expected_start);
            assert_eq!(part.end_byte - part.start_byte + 1, part.part_size);
            assert_eq!(part.total_size, data.len() as u64);
            expected_start = part.end_byte + 1;
        }
        assert_eq!(parts.last().unwrap().end_byte, data.len() as u64);

        // Verify: exactly the final part carries the whole-file crc32
        let finals: Vec<_> = parts.iter().filter(|p| p.crc32.is_some()).collect();
        assert_eq!(finals.len(), 1);
        assert_eq!(finals[0].crc32, Some(crc32fast::hash(&data)));

        // Verify: per-part checksums cover the raw slices
        let mut offset = 0usize;
        for part in &parts {
            let slice = &data[offset..offset + part.part_size as usize];
            assert_eq!(part.pcrc32, crc32fast::hash(slice));
            offset += part.part_size as usize;
        }

        // Verify: round trip recovers the input
        let wire: Vec<u8> = parts.iter().flat_map(|p| p.data.as_ref().to_vec()).collect();
        assert_eq!(decode(&wire), data);

        // Verify: line bounds (width + 1 only for lines ending in an escape pair)
        for part in &parts {
            for line in part.data.split(|&b| b == 0x0A) {
                let line = line.strip_suffix(&[0x0D]).unwrap_or(line);
                assert!(line.len() <= line_width + 1);
                if line.len() == line_width + 1 {
                    assert_eq!(line[line_width - 1], 0x3D);
                }
            }
        }
    }
});
