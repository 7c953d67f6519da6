#[cfg(test)]
mod qr_proptests {
    use proptest::prelude::*;

    use qrlite::*;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn qr_strategy() -> impl Strategy<Value = (ECLevel, Vec<u8>)> {
        ec_level_strategy().prop_flat_map(|ecl| {
            let max_sz = max_capacity(Mode::Byte, ecl);
            prop::collection::vec(any::<u8>(), 0..=max_sz).prop_map(move |data| (ecl, data))
        })
    }

    proptest! {
        #[test]
        fn proptest_round_trip(params in qr_strategy()) {
            let (ecl, data) = params;

            let qr = QRBuilder::new(&data).ec_level(ecl).build().unwrap();
            let decoded = QRReader::read(qr.grid()).expect("Failed to read QR");

            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_smallest_version(len in 0..=520_usize, ecl in ec_level_strategy()) {
            match select_version(len, Mode::Byte, ecl) {
                Ok(ver) => {
                    prop_assert!(len <= ver.capacity(Mode::Byte, ecl));
                    if ver.number() > 1 {
                        let prev = Version::from_number(ver.number() - 1).unwrap();
                        prop_assert!(len > prev.capacity(Mode::Byte, ecl));
                    }
                }
                Err(e) => prop_assert_eq!(e.kind(), ErrorKind::CapacityExceeded),
            }
        }

        #[test]
        fn proptest_version_monotonic(a in 0..=520_usize, b in 0..=520_usize) {
            let (short, long) = (a.min(b), a.max(b));
            let v1 = select_version(short, Mode::Byte, ECLevel::L).unwrap();
            let v2 = select_version(long, Mode::Byte, ECLevel::L).unwrap();
            prop_assert!(v1.number() <= v2.number());
        }

        #[test]
        fn proptest_finders_fixed(data in prop::collection::vec(any::<u8>(), 0..=200)) {
            let qr = QRBuilder::new(&data).ec_level(ECLevel::L).build().unwrap();
            let reference = blank_symbol(qr.size()).unwrap();
            for r in 0..qr.size() {
                for c in 0..qr.size() {
                    if is_reserved(r, c, qr.size()) {
                        prop_assert_eq!(qr.grid().get(r, c), reference.get(r, c));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use qrlite::{
        AxisAlignedSampler, ECLevel, ErrorKind, Grid, Matrix, Module, QRBuilder, QRError,
        QRReader, Version,
    };

    #[test_case("Hello, world!".to_string(), 1, ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), 1, ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), 1, ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), 1, ECLevel::H; "test_qr_4")]
    #[test_case("B3@j#Z%8vK!3zC^8&rF9*b6".repeat(4), 7, ECLevel::L; "test_qr_5")]
    #[test_case("A11111111111111".repeat(5), 7, ECLevel::M; "test_qr_6")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3), 7, ECLevel::Q; "test_qr_7")]
    #[test_case("1234567890".repeat(6), 7, ECLevel::H; "test_qr_8")]
    #[test_case("B3@j#Z%8vK!3zC^8&rF9*b6".repeat(11), 10, ECLevel::L; "test_qr_9")]
    #[test_case("A11111111111111".repeat(14), 10, ECLevel::M; "test_qr_10")]
    #[test_case("aAAAAAAAAA1111111111111111AAAAAAAAAAa".repeat(4), 12, ECLevel::Q; "test_qr_11")]
    #[test_case("1234567890".repeat(22), 15, ECLevel::H; "test_qr_12")]
    fn test_qr(data: String, ver: usize, ecl: ECLevel) {
        let ver = Version::from_number(ver).unwrap();
        let qr = QRBuilder::new(data.as_bytes()).version(ver).ec_level(ecl).build().unwrap();

        let img = image::DynamicImage::ImageLuma8(qr.render(3));
        let decoded = QRReader::read_image(&img, &AxisAlignedSampler::new()).expect("Failed to read QR");

        assert_eq!(data.as_bytes(), decoded);
    }

    #[test]
    fn test_single_byte_symbol() {
        let qr = QRBuilder::new(b"A").build().unwrap();
        assert_eq!(qr.version().number(), 1);
        assert_eq!(qr.size(), 21);

        let grid = qr.grid();
        assert_eq!(grid.get(0, 0), Ok(Module::Dark));
        assert_eq!(grid.get(1, 1), Ok(Module::Light));
        assert_eq!(grid.get(3, 3), Ok(Module::Dark));
        assert_eq!(grid.get(0, 20), Ok(Module::Dark));
        assert_eq!(grid.get(20, 0), Ok(Module::Dark));
        // Mode indicator 0100 occupies the two bottom rows of the rightmost column pair
        assert_eq!(grid.get(20, 19), Ok(Module::Dark));
        assert_eq!(grid.count_empty_modules(), 441 - 3 * 49 - 24);

        assert_eq!(QRReader::read(grid).unwrap(), b"A");
    }

    #[test_case(ECLevel::L, 520)]
    #[test_case(ECLevel::M, 412)]
    #[test_case(ECLevel::Q, 292)]
    #[test_case(ECLevel::H, 220)]
    fn test_capacity_boundary(ecl: ECLevel, max: usize) {
        let data = vec![0x42; max];
        let qr = QRBuilder::new(&data).ec_level(ecl).build().unwrap();
        assert_eq!(qr.version().number(), 15);
        assert_eq!(QRReader::read(qr.grid()).unwrap(), data);

        let data = vec![0x42; max + 1];
        let err = QRBuilder::new(&data).ec_level(ecl).build().unwrap_err();
        assert_eq!(err, QRError::CapacityExceeded { required: max + 1, max });
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn test_reject_small_grid() {
        let grid = Grid::from_rows(&vec![vec![false; 20]; 20]).unwrap();
        let err = QRReader::read(&grid).unwrap_err();
        assert_eq!(err, QRError::SymbolTooSmall { size: 20 });
        assert_eq!(err.kind(), ErrorKind::SymbolTooSmall);
    }

    #[test]
    fn test_reject_ragged_grid() {
        let rows = vec![vec![0u8; 21], vec![0u8; 20]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_text_round_trip() {
        let text = "Grüße, señor! 5£ \u{80}";
        let qr = QRBuilder::from_text(text).unwrap().ec_level(ECLevel::Q).build().unwrap();
        assert_eq!(QRReader::read_text(qr.grid()).unwrap(), text);
    }

    #[test]
    fn test_concurrent_build_and_read() {
        use rayon::prelude::*;

        let inputs = (0..64).map(|i| vec![i as u8; i * 5]).collect::<Vec<_>>();
        let outputs = inputs
            .par_iter()
            .map(|data| {
                let qr = QRBuilder::new(data).build().unwrap();
                QRReader::read(qr.grid()).unwrap()
            })
            .collect::<Vec<_>>();
        assert_eq!(inputs, outputs);
    }
}
