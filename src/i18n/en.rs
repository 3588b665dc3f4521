use super::MessageKey;

pub(super) const fn message(key: MessageKey) -> &'static str {
    match key {
        MessageKey::LoginTitle => "Login - Welcome Back",
        MessageKey::LoginDescription => "Login to your account",
        MessageKey::SignupTitle => "Create Account",
        MessageKey::SignupDescription => "Create your account for free",
        MessageKey::WelcomeBack => "Welcome Back",
        MessageKey::NoAccount => "Don't have an account yet?",
        MessageKey::SignUp => "Sign up",
        MessageKey::EmailPlaceholder => "email address",
        MessageKey::PasswordPlaceholder => "Password",
        MessageKey::LoginButton => "Login",
        MessageKey::Or | MessageKey::OrSignUpWith => "OR",
        MessageKey::LoginWithApple => "Login with Apple",
        MessageKey::LoginWithGoogle => "Login with Google",
        MessageKey::LoginWithX => "Login with X",
        MessageKey::CreateAccount => "Create Account",
        MessageKey::AlreadyHaveAccount => "Already have an account?",
        MessageKey::SignIn => "Sign in",
        MessageKey::NamePlaceholder => "Full name",
        MessageKey::ConfirmPasswordPlaceholder => "Confirm password",
        MessageKey::SignupButton => "Sign up",

        MessageKey::NameRequired => "Name is required",
        MessageKey::NameMinLength => "Name must be at least 2 characters",
        MessageKey::EmailRequired => "Email is required",
        MessageKey::EmailInvalid => "Invalid email",
        MessageKey::PasswordRequired => "Password is required",
        MessageKey::PasswordMinLength => "Password must be at least 8 characters",
        MessageKey::PasswordUppercase => "Password must contain at least one uppercase letter",
        MessageKey::PasswordLowercase => "Password must contain at least one lowercase letter",
        MessageKey::PasswordNumber => "Password must contain at least one number",
        MessageKey::PasswordSpecial => "Password must contain at least one special character",
        MessageKey::ConfirmPasswordRequired => "Password confirmation is required",
        MessageKey::PasswordsMustMatch => "Passwords must match",

        MessageKey::PasswordMustContain => "Your password must contain:",
        MessageKey::PasswordReqMinLength => "At least 8 characters",
        MessageKey::PasswordReqUppercase => "At least one uppercase letter",
        MessageKey::PasswordReqNumber => "At least one number",
        MessageKey::PasswordReqSpecial => "At least one special character",
        MessageKey::PasswordStrengthVeryWeak => "Very weak",
        MessageKey::PasswordStrengthWeak => "Weak",
        MessageKey::PasswordStrengthMedium => "Medium",
        MessageKey::PasswordStrengthStrong => "Strong",

        MessageKey::Language => "Language",
        MessageKey::Portuguese => "Português",
        MessageKey::English => "English",

        MessageKey::ApiFieldsRequired => "Name, email and password are required",
        MessageKey::ApiEmailTaken => "Email already registered",
        MessageKey::ApiRegistered => "User registered successfully",
        MessageKey::ApiInvalidCredentials => "Invalid email or password",
        MessageKey::ApiLoggedIn => "Login successful",
        MessageKey::ApiRouteNotFound => "Route not found",
        MessageKey::ApiProcessingError => "Error processing request",
        MessageKey::LanguageNotSupported => "Language not supported",
    }
}
