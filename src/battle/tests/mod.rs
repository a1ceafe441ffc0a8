

#[cfg(test)]
mod test_status_conditions;




pub mod common;
