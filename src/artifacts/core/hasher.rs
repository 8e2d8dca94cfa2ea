use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};

/// Compute the content digest of `data`.
///
/// Callers pass the canonical uncompressed serialization
/// (`"<type> <size>\0<payload>"`), never the compressed bytes, so that the
/// digest of an object does not depend on the compression pass.
pub fn hash(data: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(data);

    ObjectId::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b"blob 0\0".as_slice(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391")]
    #[case(b"blob 6\0hello\n".as_slice(), "ce013625030ba8dba906f756967f9e9ca394464a")]
    #[case(b"tree 0\0".as_slice(), "4b825dc642cb6eb9a060e54bf8d69288fbee4904")]
    fn test_hash_matches_known_object_ids(#[case] data: &[u8], #[case] expected: &str) {
        assert_eq!(hash(data).to_string(), expected);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let data = b"some content with a \0 in the middle";
        assert_eq!(hash(data), hash(data));
        assert_ne!(hash(data), hash(b"some other content"));
    }
}
