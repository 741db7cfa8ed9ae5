#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use yencrs::{EncodeConfig, Encoder};

fuzz_target!(|data: Vec<u8>| {
    let configs = vec![
        EncodeConfig::new(1, 1).unwrap(),
        EncodeConfig::new(7, 13).unwrap(),
        EncodeConfig::new(128, 128).unwrap(),
        EncodeConfig::default(),
    ];

    for config in configs {
        let encoder = Encoder::new(config.with_file_name("fuzz.bin"));

        // Iterator and collection deliveries must agree byte for byte
        let collected = encoder.encode_bytes(data.clone()).unwrap();

        let mut streamed = Vec::new();
        encoder
            .encode_reader_with(Cursor::new(data.clone()), data.len() as u64, |part| {
                streamed.push(part)
            })
            .unwrap();

        assert_eq!(collected.len(), streamed.len());
        for (c, s) in collected.iter().zip(&streamed) {
            assert_eq!(c.data, s.data);
            assert_eq!(c.file_name, s.file_name);
            assert_eq!(c.part_num, s.part_num);
            assert_eq!(c.part_total, s.part_total);
            assert_eq!(c.start_byte, s.start_byte);
            assert_eq!(c.end_byte, s.end_byte);
            assert_eq!(c.part_size, s.part_size);
            assert_eq!(c.total_size, s.total_size);
            assert_eq!(c.pcrc32, s.pcrc32);
            assert_eq!(c.crc32, s.crc32);
        }

        // Determinism: a second run produces identical parts
        let again = encoder.encode_bytes(data.clone()).unwrap();
        assert_eq!(collected.len(), again.len());
        for (c, a) in collected.iter().zip(&again) {
            assert_eq!(c.data, a.data);
            assert_eq!(c.pcrc32, a.pcrc32);
            assert_eq!(c.crc32, a.crc32);
        }
    }
});
