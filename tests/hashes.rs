use hex_literal::hex;
use msgdigester::MessageDigester;

const PHRASE: &str = "Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";
const SAMPLE: &str = "Hello SrcCodes !";

fn digest(algorithm: &str, message: &str) -> Vec<u8> {
	MessageDigester::with_default_provider()
		.expect("built-in provider initializes")
		.digest_bytes(algorithm, message.as_bytes())
		.expect("algorithm is registered")
}

#[test]
fn lib_blake2b_hash() {
	assert_eq!(digest("BLAKE2B-512", PHRASE)[..], hex!("95b7ecb0d7de59820205a0a94fe3ca5ee36fd296b1a9ecaa4e01634aed9fa9505d70182c12f900b9dd95f1d5c04fe57dbc5b1e48acdf3a8bae2996f5d8f4578a"));
}

#[test]
fn lib_blake2s_hash() {
	assert_eq!(digest("BLAKE2S", PHRASE)[..], hex!("dbfd3f2c835adcc9fc955d812384bb3bf569de0b9613ffca0e723254c05cf497"));
}

#[test]
fn lib_gost94_hash() {
	assert_eq!(digest("GOST94-TEST", PHRASE)[..], hex!("1845acc06577ead1f5b671e7e452fc6064e90ab1bbb536df36a91327e40e1872"));
}

#[test]
fn lib_groestl_hash() {
	assert_eq!(digest("GROESTL-256", PHRASE)[..], hex!("f65cae36b7a0cb51e8ee732f4090ffacaa8f910a793596046073b8457bc4a356"));
}

#[test]
fn lib_sha1_hash() {
	assert_eq!(digest("SHA-1", PHRASE)[..], hex!("1C90817FE5067AB226A331D4E7454858F6DD966A"));
}

#[test]
fn sample_message_sha256() {
	assert_eq!(digest("SHA-256", SAMPLE)[..], hex!("52040d1f537016ae78a97d9436a49b6e65d2478182f6aaac813369718fdb59cc"));
}

#[test]
fn sample_message_md5_and_sha1() {
	assert_eq!(digest("MD5", SAMPLE)[..], hex!("5f416b51e894d976d324bb196b24e53f"));
	assert_eq!(digest("SHA1", SAMPLE)[..], hex!("f73cc07122121b850df8214904434a9ee72b4fd8"));
}

#[test]
fn sample_message_sha3_512() {
	assert_eq!(digest("SHA3-512", SAMPLE)[..], hex!("0619c48f1129f1063a80ef089c4df5ad41d8d30ac146c4bf5581ae2790baf8e01bfe3377c5f6188cfc01e6068a0c949a494d5732922a26433d908db3c23030b5"));
}
