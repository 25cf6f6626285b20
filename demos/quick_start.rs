use easy_result::{collect_results, Error, Result};

fn parse_port(input: &str) -> Result<u16> {
    match input.parse::<u16>() {
        Ok(port) => Result::success(port),
        Err(e) => Result::failure(Error::new("Port.Invalid", e.to_string())),
    }
}

fn save_settings(port: u16) -> Result {
    if port < 1024 {
        return Result::failure(Error::new("Port.Privileged", "Ports below 1024 need root."));
    }
    Result::SUCCESS
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Success and failure values
    println!("\n1. Success and Failure:");
    for input in ["8080", "http"] {
        let r = parse_port(input);
        let (is_success, error) = r.deconstruct();
        println!("{input}: success={is_success}, error code={:?}", error.code());
    }

    // 2. Composing operators
    println!("\n2. Composing Operators:");
    let message = parse_port("80")
        .tap(|port| println!("parsed port {port}"))
        .and_then(|port| save_settings(port).map(|()| port))
        .match_with(|port| format!("saved {port}"), |e| format!("{}: {}", e.code(), e.message()));
    println!("{message}");

    // 3. Coercions
    println!("\n3. Coercions:");
    let env_value: Option<&str> = None;
    let r: Result<&str> = env_value.into();
    println!("missing variable -> {}", r.error());

    // 4. Collecting
    println!("\n4. Collecting Results:");
    let ports = collect_results(["80", "443", "8080"].into_iter().map(parse_port));
    println!("{:?}", ports);
}
