// classifieds/src/locale.rs
use actix_session::Session;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Session key holding the visitor's language choice.
pub const LOCALE_SESSION_KEY: &str = "locale";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn dir(&self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    pub fn is_secondary(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

/// UI strings for one language.
#[derive(Debug, Clone, Serialize)]
pub struct Translations {
    pub app_name: &'static str,
    pub home_title: &'static str,
    pub home_subtitle: &'static str,
    pub featured_ads: &'static str,
    pub browse_categories: &'static str,
    pub post_ad: &'static str,
    pub choose_category: &'static str,
    pub category: &'static str,
    pub back_to_categories: &'static str,
    pub basic_info: &'static str,
    pub additional_details: &'static str,
    pub loading_fields: &'static str,
    pub location: &'static str,
    pub contact_info: &'static str,
    pub submit: &'static str,
    pub select_placeholder: &'static str,
    pub success_message: &'static str,
    pub switch_language: &'static str,
    pub has_custom_fields: &'static str,
    pub not_found: &'static str,
    pub title_field: &'static str,
    pub description_field: &'static str,
    pub submitting: &'static str,
    pub no_ads: &'static str,
    pub home: &'static str,
    pub upload_images: &'static str,
    pub upload_images_hint: &'static str,
    pub add_video: &'static str,
}

const EN: Translations = Translations {
    app_name: "Classifieds",
    home_title: "Buy and sell anything",
    home_subtitle: "Find great deals near you or post your own ad in minutes",
    featured_ads: "Featured ads",
    browse_categories: "Browse categories",
    post_ad: "Post an ad",
    choose_category: "Choose a category for your ad",
    category: "Category",
    back_to_categories: "Change category",
    basic_info: "Basic information",
    additional_details: "Additional details",
    loading_fields: "Loading category fields...",
    location: "Location",
    contact_info: "Contact information",
    submit: "Post now",
    select_placeholder: "Select...",
    success_message: "Your ad has been posted successfully!",
    switch_language: "العربية",
    has_custom_fields: "Has custom fields",
    not_found: "Page not found",
    title_field: "Title",
    description_field: "Description",
    submitting: "Posting...",
    no_ads: "No ads yet",
    home: "Home",
    upload_images: "Photos",
    upload_images_hint: "Add up to 8 photos. The first one is the main photo.",
    add_video: "Video",
};

const AR: Translations = Translations {
    app_name: "إعلانات مبوبة",
    home_title: "بيع واشترِ أي شيء",
    home_subtitle: "اعثر على أفضل العروض بالقرب منك أو انشر إعلانك خلال دقائق",
    featured_ads: "إعلانات مميزة",
    browse_categories: "تصفح الفئات",
    post_ad: "أضف إعلان",
    choose_category: "اختر فئة إعلانك",
    category: "الفئة",
    back_to_categories: "تغيير الفئة",
    basic_info: "المعلومات الأساسية",
    additional_details: "تفاصيل إضافية",
    loading_fields: "جاري تحميل حقول الفئة...",
    location: "الموقع",
    contact_info: "معلومات الاتصال",
    submit: "انشر الآن",
    select_placeholder: "اختر...",
    success_message: "تم نشر إعلانك بنجاح!",
    switch_language: "English",
    has_custom_fields: "تحتوي على حقول مخصصة",
    not_found: "الصفحة غير موجودة",
    title_field: "العنوان",
    description_field: "الوصف",
    submitting: "جاري النشر...",
    no_ads: "لا توجد إعلانات بعد",
    home: "الرئيسية",
    upload_images: "الصور",
    upload_images_hint: "أضف حتى 8 صور. الصورة الأولى هي الصورة الرئيسية.",
    add_video: "فيديو",
};

/// Everything locale-dependent that rendering and validation need,
/// passed explicitly instead of looked up globally.
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext {
    pub locale: Locale,
    pub text: &'static Translations,
}

impl LocaleContext {
    pub fn new(locale: Locale) -> Self {
        let text = match locale {
            Locale::En => &EN,
            Locale::Ar => &AR,
        };
        Self { locale, text }
    }

    pub fn required_message(&self, label: &str) -> String {
        match self.locale {
            Locale::En => format!("{} is required", label),
            Locale::Ar => format!("{} مطلوب", label),
        }
    }

    pub fn min_length_message(&self, field: &str, min: usize) -> String {
        match self.locale {
            Locale::En => format!("{} must be at least {} characters", field, min),
            Locale::Ar => format!("يجب أن يحتوي {} على {} أحرف على الأقل", field, min),
        }
    }

    pub fn max_length_message(&self, field: &str, max: usize) -> String {
        match self.locale {
            Locale::En => format!("{} must be at most {} characters", field, max),
            Locale::Ar => format!("يجب ألا يتجاوز {} {} حرفًا", field, max),
        }
    }

    pub fn number_message(&self, label: &str) -> String {
        match self.locale {
            Locale::En => format!("{} must be a number", label),
            Locale::Ar => format!("يجب أن يكون {} رقمًا", label),
        }
    }

    pub fn min_value_message(&self, label: &str, min: f64) -> String {
        match self.locale {
            Locale::En => format!("{}: minimum value is {}", label, min),
            Locale::Ar => format!("{}: الحد الأدنى هو {}", label, min),
        }
    }

    pub fn max_value_message(&self, label: &str, max: f64) -> String {
        match self.locale {
            Locale::En => format!("{}: maximum value is {}", label, max),
            Locale::Ar => format!("{}: الحد الأقصى هو {}", label, max),
        }
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// The visitor's language from the cookie session, English when unset or
/// unreadable.
pub fn locale_from_session(session: &Session) -> LocaleContext {
    match session.get::<String>(LOCALE_SESSION_KEY) {
        Ok(Some(code)) => LocaleContext::new(Locale::from_code(&code)),
        Ok(None) => LocaleContext::default(),
        Err(err) => {
            warn!("Unreadable locale in session: {}", err);
            LocaleContext::default()
        }
    }
}
