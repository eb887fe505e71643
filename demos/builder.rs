use fluent_uri_builder::UriBuilder;

fn main() -> Result<(), fluent_uri_builder::Error> {
    let mut base = UriBuilder::parse("https://api.example.com/v1/{org}?format=json")?;
    base.with_segment("org", "rust-lang");
    println!("{base:#?}");

    for repo in ["rust", "cargo", "rust-analyzer"] {
        let mut b = base.clone();
        b.add_path_template("repos/{repo}/issues")?
            .with_segment("repo", repo)
            .add_queries([("state", "open"), ("labels", "A-diagnostics & C-bug")])?;
        println!("{}", b.build()?);
    }

    base.with_scheme("http")?
        .with_host("localhost")?
        .with_port(8080)
        .with_fragment("top")?;
    println!("{}", base.build()?);

    Ok(())
}
