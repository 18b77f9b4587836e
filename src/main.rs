extern crate env_logger;
#[macro_use] extern crate log;
extern crate rest_matrix as rm;

use rm::alg;
use rm::config;
use rm::matrix;

fn parse_vectors(args: &[String]) -> Result<Vec<alg::Vec3>, String> {
    if args.len() % 3 != 0 {
        return Err(format!(
            "expected coordinates in groups of three, got {}",
            args.len(),
        ));
    }

    let mut components = Vec::with_capacity(args.len());

    for arg in args {
        let value = arg.parse::<f64>()
            .map_err(|_| format!("\"{}\" is not a number", arg))?;

        components.push(value);
    }

    Ok(components.chunks(3)
        .map(|c| alg::Vec3::new(c[0], c[1], c[2]))
        .collect())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    ).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let vectors = if args.is_empty() {
        vec![alg::Vec3::one()]
    } else {
        match parse_vectors(&args) {
            Ok(vectors) => vectors,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    };

    let params = *config::REST_CONFIG;
    info!("Rest parameters: {:?}", params);

    for vec in vectors {
        println!("input        {}", vec);
        println!("rest_matrix  {}", matrix::rest_matrix(vec));
        println!("rest_matrix2 {}", matrix::rest_matrix2(vec));
        println!("configured   {}", params.apply(vec));
    }
}
