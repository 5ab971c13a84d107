//! Static markup of the four screens.

use crate::definitions::{LANGUAGE_TOGGLE_ID, Page, TIMER_ID, Trigger};
use crate::document::{Document, Element, ElementKind, Tone};
use crate::i18n::Locale;

/// Builds a fresh copy of `page`, as if the browser had just loaded it.
pub fn build(page: Page, code_length: u8) -> Document {
    let mut doc = Document::new(page, title(page));
    language_selector(&mut doc);
    match page {
        Page::Login => login(&mut doc),
        Page::Register => register(&mut doc),
        Page::Verification => verification(&mut doc, code_length),
        Page::Success => success(&mut doc),
    }
    doc
}

fn title(page: Page) -> String {
    let screen = match page {
        Page::Login => "ログイン",
        Page::Register => "新規登録",
        Page::Verification => "認証コード",
        Page::Success => "登録完了",
    };
    format!("{screen} - {}", Locale::Ja.app_name())
}

fn language_selector(doc: &mut Document) {
    doc.push(Element::new(ElementKind::LanguageToggle).with_id(LANGUAGE_TOGGLE_ID));
    doc.push(
        Element::new(ElementKind::LocaleIndicator(Locale::Ja))
            .with_text("JP")
            .with_tone(Tone::Accent),
    );
    doc.push(
        Element::new(ElementKind::LocaleIndicator(Locale::En))
            .with_text("EN")
            .with_tone(Tone::Neutral),
    );
}

fn trigger(kind: ElementKind, trigger: Trigger) -> Element {
    Element::new(kind).with_id(trigger.element_id())
}

fn social_buttons(doc: &mut Document) {
    doc.push(Element::new(ElementKind::Divider).with_label("または", "or"));
    doc.push(
        Element::new(ElementKind::SocialButton)
            .with_label("Googleで続ける", "Continue with Google"),
    );
    doc.push(
        Element::new(ElementKind::SocialButton)
            .with_label("Appleで続ける", "Continue with Apple"),
    );
}

fn login(doc: &mut Document) {
    doc.push(Element::new(ElementKind::Heading).with_label("ログイン", "Log in"));
    doc.push(
        Element::new(ElementKind::InputField { secret: false })
            .with_label("メールアドレスまたは電話番号", "Email or phone number")
            .with_placeholder("example@parking.jp", "example@parking.jp")
            .autofocus(),
    );
    doc.push(
        Element::new(ElementKind::InputField { secret: true })
            .with_label("パスワード", "Password")
            .with_placeholder("パスワードを入力", "Enter your password"),
    );
    doc.push(
        Element::new(ElementKind::Link)
            .with_label("パスワードをお忘れですか？", "Forgot your password?"),
    );
    doc.push(Element::new(ElementKind::PrimaryButton).with_label("ログイン", "Log in"));
    social_buttons(doc);
    doc.push(
        Element::new(ElementKind::Paragraph)
            .with_label("アカウントをお持ちでないですか？", "Don't have an account?"),
    );
    doc.push(
        trigger(ElementKind::PrimaryButton, Trigger::ShowRegister)
            .with_label("新規登録", "Sign up"),
    );
}

fn register(doc: &mut Document) {
    doc.push(trigger(ElementKind::Link, Trigger::BackToLogin).with_label("← 戻る", "← Back"));
    doc.push(Element::new(ElementKind::Heading).with_label("新規登録", "Create account"));
    doc.push(
        Element::new(ElementKind::InputField { secret: false })
            .with_label("お名前", "Full name")
            .with_placeholder("山田 太郎", "Taro Yamada")
            .autofocus(),
    );
    doc.push(
        Element::new(ElementKind::InputField { secret: false })
            .with_label("メールアドレス", "Email")
            .with_placeholder("example@parking.jp", "example@parking.jp"),
    );
    doc.push(
        Element::new(ElementKind::InputField { secret: false })
            .with_label("電話番号", "Phone number")
            .with_placeholder("090-1234-5678", "090-1234-5678"),
    );
    doc.push(
        Element::new(ElementKind::InputField { secret: true })
            .with_label("パスワード", "Password")
            .with_placeholder("8文字以上", "At least 8 characters"),
    );
    doc.push(
        trigger(ElementKind::PrimaryButton, Trigger::ShowVerification)
            .with_label("認証コードを送信", "Send verification code"),
    );
    social_buttons(doc);
    doc.push(
        Element::new(ElementKind::Paragraph)
            .with_label("既にアカウントをお持ちですか？", "Already have an account?"),
    );
    doc.push(
        trigger(ElementKind::PrimaryButton, Trigger::ShowLogin).with_label("ログイン", "Log in"),
    );
}

fn verification(doc: &mut Document, code_length: u8) {
    doc.push(
        trigger(ElementKind::Link, Trigger::BackToRegister).with_label("← 戻る", "← Back"),
    );
    doc.push(
        Element::new(ElementKind::Heading).with_label("認証コード入力", "Enter verification code"),
    );
    doc.push(Element::new(ElementKind::Paragraph).with_label(
        "SMSで送信された認証コードを入力してください",
        "Enter the code we sent you by SMS",
    ));
    for index in 1..=code_length {
        let cell = Element::new(ElementKind::CodeCell { index });
        doc.push(if index == 1 { cell.autofocus() } else { cell });
    }
    doc.push(Element::new(ElementKind::Link).with_label("コードを再送信", "Resend code"));
    doc.push(Element::new(ElementKind::Timer).with_id(TIMER_ID));
    doc.push(
        trigger(ElementKind::PrimaryButton, Trigger::ShowSuccess).with_label("確認", "Verify"),
    );
}

fn success(doc: &mut Document) {
    doc.push(Element::new(ElementKind::Heading).with_label("登録完了", "Registration complete"));
    doc.push(Element::new(ElementKind::Paragraph).with_label(
        "アカウントの登録が完了しました",
        "Your account has been created",
    ));
    doc.push(
        trigger(ElementKind::PrimaryButton, Trigger::ShowLogin)
            .with_label("ログインへ進む", "Continue to log in"),
    );
}
