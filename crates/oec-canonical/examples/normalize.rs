use oec_canonical::{normalize_phone, normalize_postal, normalize_title_case, normalize_zip};

fn main() {
    println!("{}", normalize_title_case("  299 DOON valley drive "));

    for (label, result) in [
        ("postal", normalize_postal("n2g4m4")),
        ("zip", normalize_zip("49503 1234")),
        ("phone", normalize_phone("(519) 748.5220")),
    ] {
        match result {
            Ok(value) => println!("{label}: {value}"),
            Err(err) => {
                eprintln!("{label} rejected: {}", err);
                std::process::exit(1);
            }
        }
    }
}
