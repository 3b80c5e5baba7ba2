#[derive(Debug)]
pub struct ExchangeRate {
    pub quote: String,
    pub base: String,
    pub rate: f64,
}
