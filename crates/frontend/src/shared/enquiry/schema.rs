use contracts::domain::common::ValidationError;
use serde::Serialize;
use std::fmt::Debug;

/// Describes one enquiry form: where it posts, what it starts with, how the
/// editable fields become a wire record, and what the visitor is told.
///
/// Contact, wedding and corporate forms are all driven through
/// [`EnquiryForm`](super::form::EnquiryForm) with their own schema.
pub trait EnquirySchema: Clone + Debug + Send + Sync + 'static {
    /// Editable values bound to the inputs
    type Fields: Clone + Debug + PartialEq + Send + Sync + 'static;
    /// JSON body sent to the collector
    type Record: Serialize + Debug;

    /// Collector path, e.g. `/api/enquiries/contact`
    fn endpoint(&self) -> &'static str;

    /// Values shown on first render and after a successful send
    fn initial(&self) -> Self::Fields;

    /// Validates the fields and builds the record to send
    fn to_record(&self, fields: &Self::Fields) -> Result<Self::Record, ValidationError>;

    fn success_message(&self) -> &'static str;

    fn failure_message(&self) -> &'static str;
}
