//! Failure taxonomy shared by every store port.

use super::define_port_error;

define_port_error! {
    /// Errors raised by relational store adapters.
    pub enum StoreError {
        /// The store could not be reached or a connection could not be checked out.
        Connection { message: String } =>
            "store connection failed: {message}",
        /// A statement failed for a reason other than an integrity constraint.
        Query { message: String } =>
            "store query failed: {message}",
        /// A uniqueness constraint rejected the write.
        Duplicate { message: String } =>
            "duplicate record: {message}",
        /// A foreign key did not resolve to a stored parent row.
        MissingReference { message: String } =>
            "missing referenced record: {message}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::connection("refused"), "store connection failed: refused")]
    #[case(StoreError::query("syntax"), "store query failed: syntax")]
    #[case(StoreError::duplicate("users.email"), "duplicate record: users.email")]
    #[case(
        StoreError::missing_reference("orders.user_id"),
        "missing referenced record: orders.user_id"
    )]
    fn messages_name_the_failure(#[case] error: StoreError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
