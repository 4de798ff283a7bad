/// Top-level screens. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Screen {
    App,
    Login,
    Register,
    VerifyEmail,
    ForgotPassword,
    ResetPassword,
    PasswordChanged,
    Subscription,
}

/// Modal prompts shown above the current screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Login or registration is needed. Guest entry is offered unless the
    /// guest allowance is exhausted.
    AuthActionRequired { limit_reached: bool },
    AttachmentLimit,
}
