use vuload::error::AppResult;

fn main() -> AppResult<()> {
    vuload::run()
}
