//! The caller-supplied callback seam that survives the move to generics:
//! bucket placement for the hash table.

/// Maps an integer key to a bucket index for a table of the given size.
///
/// Implementations must return an index in `[0, size)`; the table indexes
/// its bucket array with the result directly and panics if the contract is
/// violated.
pub trait BucketHash {
    fn bucket(&self, size: usize, key: i64) -> usize;
}

/// Plain modulo placement, the default hasher. Uses `rem_euclid` so
/// negative keys still land in range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ModHash;

impl BucketHash for ModHash {
    fn bucket(&self, size: usize, key: i64) -> usize {
        key.rem_euclid(size as i64) as usize
    }
}

/// Adapter that lets a plain closure act as the table's hasher.
#[derive(Copy, Clone, Debug)]
pub struct HashFn<F>(pub F);

impl<F> BucketHash for HashFn<F>
where
    F: Fn(usize, i64) -> usize,
{
    fn bucket(&self, size: usize, key: i64) -> usize {
        (self.0)(size, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_hash_in_range() {
        for key in [-9, -1, 0, 1, 7, 63, i64::MAX, i64::MIN] {
            let b = ModHash.bucket(8, key);
            assert!(b < 8, "key {key} landed at {b}");
        }
    }

    #[test]
    fn closures_are_hashers() {
        let h = HashFn(|size: usize, key: i64| key as usize % size);
        assert_eq!(h.bucket(4, 5), 1);
    }
}
