use proptest::prelude::*;

use modelzip_core::codec::bitvector::{diff_decode, diff_encode};
use modelzip_core::codec::golomb_rice::{decode, encode};

const MAX_BITS: usize = 200;
const MAX_VALUES: usize = 100;

proptest! {
    #[test]
    fn diff_encoding_round_trips(bits in prop::collection::vec(any::<bool>(), 0..MAX_BITS)) {
        prop_assert_eq!(diff_decode(&diff_encode(&bits)), bits);
    }

    #[test]
    fn golomb_rice_round_trips(
        values in prop::collection::vec(0u64..100_000, 0..MAX_VALUES),
        k in 0u32..32,
    ) {
        let encoded = encode(&values, k);
        prop_assert_eq!(decode(&encoded, k), values);
    }
}
