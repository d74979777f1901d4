use bolero::check;
use komihash::Komirand;

#[test]
fn fuzz_fill_matches_draws() {
    check!()
        .with_type::<(u64, u64, u16)>()
        .for_each(|(s1, s2, len)| {
            let len = usize::from(*len % 4096);
            let mut buf = vec![0u8; len];
            let mut filler = Komirand::with_seeds(*s1, *s2);
            filler.fill(&mut buf);

            let mut drawer = Komirand::with_seeds(*s1, *s2);
            for chunk in buf.chunks(8) {
                let word = drawer.next_u64().to_le_bytes();
                assert_eq!(chunk, &word[..chunk.len()], "fill() diverged from next_u64()");
            }

            // Both generators consumed the same number of draws
            assert_eq!(filler, drawer);
        });
}
