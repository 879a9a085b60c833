use crate::nanos::NANOS_PER_SEC;
use quickcheck::{Arbitrary, Gen};

mod offset;

// Plain integer arguments are bounded by the generator size, which would
// never leave the first second.

#[derive(Clone, Copy, Debug)]
struct AnyU32(u32);

impl Arbitrary for AnyU32 {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        AnyU32(g.next_u32())
    }
}

#[derive(Clone, Copy, Debug)]
struct AnyI64(i64);

impl Arbitrary for AnyI64 {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        AnyI64(g.next_u64() as i64)
    }
}

#[derive(Clone, Copy, Debug)]
struct ValidNanos(u32);

impl Arbitrary for ValidNanos {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        ValidNanos(g.next_u32() % NANOS_PER_SEC)
    }
}
