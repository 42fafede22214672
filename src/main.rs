use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    papagaio::cli::main()
}
