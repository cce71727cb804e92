//! Parse a configuration document and read values back.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use toto::{from_str, Conf, Value};

const CONFIG: &str = r#"
# This is a TOML document.

title = "TOML Example"

[owner]
name = "Tom Preston-Werner"
dob = 1979-05-27T07:32:00Z

[database]
server = "192.168.1.1"
ports = [ 8001, 8001, 8002 ]
connection_max = 5000
enabled = true

[servers.alpha]
ip = "10.0.0.1"
dc = "eqdc10"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Every leaf is stored under its full dotted key
    let tree = from_str(CONFIG)?;
    println!("Parsed {} keys:", tree.len());
    for (key, value) in &tree {
        println!("  {} = {}", key, value);
    }

    if let Some(Value::Array(ports)) = tree.get("database.ports") {
        println!("\n{} database ports", ports.len());
    }

    // Typed access with zero-value fallback
    let conf = Conf::from(tree);
    println!("\ntitle:          {}", conf.string("title"));
    println!("connection_max: {}", conf.int("database.connection_max"));
    println!("enabled:        {}", conf.bool("database.enabled"));
    println!("missing:        {:?}", conf.int("database.missing"));
    if let Some(dob) = conf.timestamp("owner.dob") {
        println!("owner born:     {}", dob.format("%Y-%m-%d"));
    }

    // Errors carry the line they were found on
    match from_str("[ok]\nkey = 12ab\n") {
        Ok(_) => println!("\nunexpectedly parsed"),
        Err(err) => println!("\nerror on line {:?}: {}", err.line(), err),
    }

    Ok(())
}
