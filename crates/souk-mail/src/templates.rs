//! HTML templates for transactional email.
//!
//! Each renderer returns a `(subject, html_body)` pair with the signed
//! token already embedded in the link; the flows hand the result
//! straight to the mail collaborator.

/// Render the account-verification email around a verification link.
pub fn verification_email(verify_url: &str) -> (String, String) {
    let subject = "Account Verification Mail".to_string();
    let body = format!(
        r#"<!DOCTYPE html>
<html>
<body>
    <div style="display: flex; align-items: center; justify-content: center; flex-direction: column;">
        <h3>Account Verification</h3>
        <br>
        <p>Thanks for choosing us, please click on the link below to verify your account</p>
        <a style="margin-top: 1rem; padding: 1rem; border-radius: 0.5rem; font-size: 1rem; text-decoration: none; background: #0275d8; color: white;"
           href="{verify_url}">
            Verify your email
        </a>
        <p style="margin-top: 1rem;">If you did not register, please kindly ignore this email and nothing will happen. Thanks</p>
    </div>
</body>
</html>
"#
    );
    (subject, body)
}

/// Render the password-reset email around a reset link.
pub fn password_reset_email(reset_url: &str) -> (String, String) {
    let subject = "Reset Password Request".to_string();
    let body = format!(
        r#"<!DOCTYPE html>
<html>
<body>
    <div style="display: flex; align-items: center; justify-content: center; flex-direction: column;">
        <h3>Reset Password</h3>
        <br>
        <p>You have requested to reset the password for your account</p>
        <a style="margin-top: 1rem; padding: 1rem; border-radius: 0.5rem; font-size: 1rem; text-decoration: none; background: #0275d8; color: white;"
           href="{reset_url}">
            Reset Password
        </a>
        <p style="margin-top: 1rem;">If you did not request this, please kindly ignore this email and nothing will happen. Thanks</p>
    </div>
</body>
</html>
"#
    );
    (subject, body)
}
