use crate::auth::accounts::UserAccount;
use crate::templates::{desktop_layout, error_box};
use maud::{html, Markup};

/// Combined sign-in / register page. Either form can carry an error from
/// a failed submission.
pub fn login_page(
    login_error: Option<&str>,
    register_error: Option<&str>,
    user: Option<&UserAccount>,
) -> Markup {
    desktop_layout(
        "Login / Register",
        user,
        html! {
            h1 { "Login / Register" }

            div class="auth-forms" {
                section {
                    h2 { "Login" }
                    @if let Some(message) = login_error {
                        (error_box(message))
                    }
                    form action="/auth/login" method="post" {
                        div {
                            label for="loginEmail" { "Email" }
                            input type="email" id="loginEmail" name="email" required;
                        }
                        div {
                            label for="loginPassword" { "Password" }
                            input type="password" id="loginPassword" name="password" required;
                        }
                        button class="btn" type="submit" { "Login" }
                    }
                }

                section {
                    h2 { "Register" }
                    @if let Some(message) = register_error {
                        (error_box(message))
                    }
                    form action="/auth/register" method="post" {
                        div {
                            label for="firstName" { "First Name" }
                            input type="text" id="firstName" name="firstName" required;
                        }
                        div {
                            label for="lastName" { "Last Name" }
                            input type="text" id="lastName" name="lastName" required;
                        }
                        div {
                            label for="phone" { "Phone Number" }
                            input type="tel" id="phone" name="phone" required;
                        }
                        div {
                            label for="registerEmail" { "Email" }
                            input type="email" id="registerEmail" name="email" required;
                        }
                        div {
                            label for="registerPassword" { "Password" }
                            input type="password" id="registerPassword" name="password" required;
                            p class="hint" {
                                "At least 6 characters, 1 uppercase, 1 lowercase, \
                                 1 special character (!?@#$%^&*)."
                            }
                        }
                        button class="btn" type="submit" { "Send Verification Code" }
                    }
                }
            }
        },
    )
}

/// Step 2 of registration: enter the code "sent" to the email address.
pub fn verify_page(email: &str, error: Option<&str>, user: Option<&UserAccount>) -> Markup {
    desktop_layout(
        "Verify your email",
        user,
        html! {
            h1 { "Verify your email" }
            p {
                "We've sent a verification code to "
                strong { (email) }
                ". Please enter it below:"
            }
            p class="hint" { "(For demo: use 123456)" }

            @if let Some(message) = error {
                (error_box(message))
            }

            form action="/auth/verify" method="post" {
                input type="hidden" name="email" value=(email);
                div {
                    label for="verificationCode" { "Verification Code" }
                    input type="text" id="verificationCode" name="code" maxlength="6" required;
                }
                button class="btn" type="submit" { "Verify & Complete Registration" }
                " "
                a class="btn ghost" href="/login" { "Back" }
            }
        },
    )
}
