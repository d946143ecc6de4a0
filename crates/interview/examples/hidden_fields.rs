//! Case types with fields hidden from the engine are rejected.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=interview=warn cargo run --example hidden_fields
//! ```

use interview::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Default, Shape)]
struct Session {
    user: String,
    #[shape(skip)]
    token: String,
}

#[derive(Shape)]
struct Request {
    path: String,
    session: Session,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Session visible: {}", interview::is_fully_visible::<Session>());
    println!("Hidden path in Request: {:?}", interview::hidden_field::<Request>());

    let mut interview = Interview::<Request, bool>::new();
    let request = Request {
        path: "/".to_string(),
        session: Session {
            user: "ada".to_string(),
            token: "secret".to_string(),
        },
    };
    match interview.add_case(request, true) {
        Ok(_) => println!("registered"),
        Err(err) => {
            println!("rejected: {err}");
            println!("caller mistake: {}", err.is_misuse());
        }
    }
}
