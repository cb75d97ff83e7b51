use xxhash_rust::xxh3::xxh3_128;

pub fn to_url_safe_base64(input: impl AsRef<[u8]>) -> String {
  base64_simd::URL_SAFE_NO_PAD.encode_to_string(input)
}

pub fn xxhash_base64_url(input: &[u8]) -> String {
  let hash = xxh3_128(input).to_le_bytes();
  to_url_safe_base64(hash)
}

#[test]
fn test_xxhash_base64_url() {
  let hash = xxhash_base64_url(b"hello");
  // 16 bytes without padding
  assert_eq!(hash.len(), 22);
  assert!(hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
  assert_eq!(hash, xxhash_base64_url(b"hello"));
  assert_ne!(hash, xxhash_base64_url(b"hello!"));
}
