use super::MessageKey;

pub(super) const fn message(key: MessageKey) -> &'static str {
    match key {
        MessageKey::LoginTitle => "Login - Bem-vindo de volta",
        MessageKey::LoginDescription => "Faça login na sua conta",
        MessageKey::SignupTitle => "Criar Conta",
        MessageKey::SignupDescription => "Crie sua conta gratuitamente",
        MessageKey::WelcomeBack => "Bem-vindo de volta",
        MessageKey::NoAccount => "Não tem uma conta ainda?",
        MessageKey::SignUp => "Cadastre-se",
        MessageKey::EmailPlaceholder => "endereço de email",
        MessageKey::PasswordPlaceholder => "Senha",
        MessageKey::LoginButton => "Entrar",
        MessageKey::Or | MessageKey::OrSignUpWith => "OU",
        MessageKey::LoginWithApple => "Entrar com Apple",
        MessageKey::LoginWithGoogle => "Entrar com Google",
        MessageKey::LoginWithX => "Entrar com X",
        MessageKey::CreateAccount => "Criar Conta",
        MessageKey::AlreadyHaveAccount => "Já tem uma conta?",
        MessageKey::SignIn => "Entrar",
        MessageKey::NamePlaceholder => "Nome completo",
        MessageKey::ConfirmPasswordPlaceholder => "Confirmar senha",
        MessageKey::SignupButton => "Cadastrar",

        MessageKey::NameRequired => "Nome é obrigatório",
        MessageKey::NameMinLength => "Nome deve ter pelo menos 2 caracteres",
        MessageKey::EmailRequired => "Email é obrigatório",
        MessageKey::EmailInvalid => "Email inválido",
        MessageKey::PasswordRequired => "Senha é obrigatória",
        MessageKey::PasswordMinLength => "Senha deve ter pelo menos 8 caracteres",
        MessageKey::PasswordUppercase => "Senha deve conter pelo menos uma letra maiúscula",
        MessageKey::PasswordLowercase => "Senha deve conter pelo menos uma letra minúscula",
        MessageKey::PasswordNumber => "Senha deve conter pelo menos um número",
        MessageKey::PasswordSpecial => "Senha deve conter pelo menos um caractere especial",
        MessageKey::ConfirmPasswordRequired => "Confirmação de senha é obrigatória",
        MessageKey::PasswordsMustMatch => "As senhas não coincidem",

        MessageKey::PasswordMustContain => "Sua senha deve conter:",
        MessageKey::PasswordReqMinLength => "Pelo menos 8 caracteres",
        MessageKey::PasswordReqUppercase => "Pelo menos uma letra maiúscula",
        MessageKey::PasswordReqNumber => "Pelo menos um número",
        MessageKey::PasswordReqSpecial => "Pelo menos um caractere especial",
        MessageKey::PasswordStrengthVeryWeak => "Muito fraca",
        MessageKey::PasswordStrengthWeak => "Fraca",
        MessageKey::PasswordStrengthMedium => "Média",
        MessageKey::PasswordStrengthStrong => "Forte",

        MessageKey::Language => "Idioma",
        MessageKey::Portuguese => "Português",
        MessageKey::English => "English",

        MessageKey::ApiFieldsRequired => "Nome, email e senha são obrigatórios",
        MessageKey::ApiEmailTaken => "Email já cadastrado",
        MessageKey::ApiRegistered => "Usuário cadastrado com sucesso",
        MessageKey::ApiInvalidCredentials => "Email ou senha inválidos",
        MessageKey::ApiLoggedIn => "Login realizado com sucesso",
        MessageKey::ApiRouteNotFound => "Rota não encontrada",
        MessageKey::ApiProcessingError => "Erro ao processar requisição",
        MessageKey::LanguageNotSupported => "Idioma não suportado",
    }
}
