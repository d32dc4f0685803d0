fn main() {
  // include_dir! does not track the embedded files on stable.
  println!("cargo:rerun-if-changed=dist");
  println!("cargo:rerun-if-env-changed=API_URL");
}
