mod subscriber_email;
mod subscription_record;
// allow external `use` statements to skip `subscriber_email` etc
pub use subscriber_email::is_well_formed;
pub use subscriber_email::SubscriberEmail;
pub use subscription_record::sanitize;
pub use subscription_record::RecordParseError;
pub use subscription_record::SubscriptionRecord;
