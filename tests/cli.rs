use assert_cmd::Command;

fn mdg() -> Command {
	let mut cmd = Command::cargo_bin("mdg").expect("mdg binary is built");
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

#[test]
fn digest_string_prints_hex_and_input(
) -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg()
		.args(["digest", "string", "-a", "SHA-256", "Hello SrcCodes !"])
		.output()?;
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout)?,
		"52040d1f537016ae78a97d9436a49b6e65d2478182f6aaac813369718fdb59cc Hello SrcCodes !\n"
	);
	Ok(())
}

#[test]
fn digest_string_hash_only_base64(
) -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg()
		.args([
			"digest", "string", "-a", "sha1", "-o", "base64",
			"--hash-only", "abc",
		])
		.output()?;
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout)?,
		"qZk+NkcGgWq6PiVxeFDCbJzQ2J0=\n"
	);
	Ok(())
}

#[test]
fn unknown_algorithm_fails() -> Result<(), Box<dyn std::error::Error>>
{
	let output = mdg()
		.args(["digest", "string", "-a", "NO-SUCH-ALGO", "x"])
		.output()?;
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unsupported digest algorithm `NO-SUCH-ALGO`"));
	assert!(output.stdout.is_empty());
	Ok(())
}

#[test]
fn unknown_provider_fails() -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg().args(["--provider", "BC", "list"]).output()?;
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("provider `BC` is unavailable"));
	Ok(())
}

#[test]
fn stdio_hashes_each_line() -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg()
		.args(["digest", "stdio", "-a", "MD5", "--hash-only"])
		.write_stdin("\nHello SrcCodes !\n")
		.output()?;
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout)?;
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(
		lines,
		vec![
			"d41d8cd98f00b204e9800998ecf8427e",
			"5f416b51e894d976d324bb196b24e53f",
		]
	);
	Ok(())
}

#[test]
fn list_prints_one_name_per_line(
) -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg().arg("list").output()?;
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout)?;
	let names: Vec<&str> = stdout.lines().collect();
	assert!(names.contains(&"SHA-256"));
	assert!(names.contains(&"WHIRLPOOL"));
	Ok(())
}

#[test]
fn list_details_marks_legacy_algorithms(
) -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg().args(["list", "--details"]).output()?;
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.lines().any(|l| l == "MD5\t16 bytes\tlegacy"));
	assert!(stdout.lines().any(|l| l == "SHA-256\t32 bytes"));
	Ok(())
}

#[test]
fn demo_prints_every_algorithm_in_listing_order(
) -> Result<(), Box<dyn std::error::Error>> {
	let listing = String::from_utf8(mdg().arg("list").output()?.stdout)?;
	let output = mdg().arg("demo").output()?;
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.starts_with(
		"Calculating Message Digest of 'Hello SrcCodes !' using all Algorithms available in RustCrypto\n"
	));
	let names: Vec<&str> = stdout
		.lines()
		.filter_map(|line| line.split_once("-->").map(|(n, _)| n))
		.collect();
	assert_eq!(names, listing.lines().collect::<Vec<_>>());
	assert!(stdout.lines().any(|line| line
		== "SHA-256-->52040d1f537016ae78a97d9436a49b6e65d2478182f6aaac813369718fdb59cc"));
	Ok(())
}

#[test]
fn completions_generate_for_bash(
) -> Result<(), Box<dyn std::error::Error>> {
	let output = mdg().args(["completions", "bash"]).output()?;
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).contains("mdg"));
	Ok(())
}
