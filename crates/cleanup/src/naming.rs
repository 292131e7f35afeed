use convert_case::{Boundary, Case, Converter};

/// Default physical naming: camel case type identifier to snake case.
///
/// Words split only where a lowercase letter meets an uppercase one, or where a
/// run of capitals hands over to a capitalised word. `OrderID` becomes `order_id`,
/// `HTTPRequestLog` becomes `http_request_log`, digits never split (`Order2Line`
/// becomes `order2line`).
pub fn camel_to_snake_case(identifier: &str) -> String {
    Converter::new()
        .set_boundaries(&[Boundary::LowerUpper, Boundary::Acronym])
        .to_case(Case::Snake)
        .convert(identifier)
}
