pub fn get_signature(version: &str) -> String {
    format!(
        r#"
   ______
  /     /|                  📦  modpack (content packager)
 /_____/ |
 |     | |                  Bumps manifest versions and zips
 |  ⚒  | /                  pack/ into dist/modpack.zip.
 |_____|/
                            v{}
"#,
        version
    )
}
