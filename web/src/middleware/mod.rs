pub(crate) mod slack_verification;
