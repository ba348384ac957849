//! Refract CLI
//!
//! Descriptor conversion and empty-value synthesis from the command line.

use refract::commands;

fn main() {
    refract::init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "desc" => {
            let name = required_arg(&args, "refract desc <type-name>");
            match commands::desc(name) {
                Ok(desc) => println!("{desc}"),
                Err(e) => fail(&e),
            }
        }
        "name" => {
            let descriptor = required_arg(&args, "refract name <descriptor>");
            match commands::name(descriptor) {
                Ok(name) => println!("{name}"),
                Err(e) => fail(&e),
            }
        }
        "check" => {
            let descriptor = required_arg(&args, "refract check <descriptor>");
            if let Err(e) = commands::check(descriptor) {
                fail(&e);
            }
        }
        "empty" => {
            let name = required_arg(&args, "refract empty <type-name> [--depth=<n>]");

            let mut max_depth = None;
            for arg in args.iter().skip(3) {
                if let Some(depth) = arg.strip_prefix("--depth=") {
                    match depth.parse::<usize>() {
                        Ok(depth) => max_depth = Some(depth),
                        Err(_) => {
                            eprintln!("error: invalid depth '{depth}'");
                            std::process::exit(1);
                        }
                    }
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                }
            }

            match commands::empty(name, max_depth) {
                Ok(value) => println!("{value}"),
                Err(e) => fail(&e),
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("refract {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// The argument after the command, or a usage error.
fn required_arg<'a>(args: &'a [String], usage: &str) -> &'a str {
    match args.get(2) {
        Some(arg) => arg.as_str(),
        None => {
            eprintln!("Usage: {usage}");
            std::process::exit(1);
        }
    }
}

fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Refract - type descriptor and reflection toolkit");
    println!();
    println!("Usage: refract <command> [options]");
    println!();
    println!("Commands:");
    println!("  desc <type-name>      Print the descriptor of a type name");
    println!("  name <descriptor>     Print the human name of a descriptor");
    println!("  check <descriptor>    Exit 0 if the descriptor is well formed, 1 otherwise");
    println!("  empty <type-name>     Print the empty value of a platform type");
    println!("        --depth=<n>     Maximum nesting depth (default 2)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Set RUST_LOG=refract_reflect=debug to trace resolution and synthesis.");
}
