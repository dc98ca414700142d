#![allow(dead_code)]

//! Static language catalog: English, Hindi, Odia.
//!
//! Every language carries the full [`Translations`] schema: marketing
//! screen strings plus the build-screen set. The structs are the schema
//! check: a language cannot ship with a missing key.

use std::fmt;
use std::str::FromStr;

/// Identifier for a supported language. Persisted as its short id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    En,
    Hi,
    Od,
}

impl LanguageId {
    /// Default language used whenever no valid selection exists.
    pub const DEFAULT: LanguageId = LanguageId::En;

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::En => "en",
            LanguageId::Hi => "hi",
            LanguageId::Od => "od",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageId::En),
            "hi" => Ok(LanguageId::Hi),
            "od" => Ok(LanguageId::Od),
            other => Err(format!("unknown language id '{other}'")),
        }
    }
}

/// Display metadata plus the translation table for one language.
#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub id: LanguageId,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    /// UI accent color hex, also used for per-language theming.
    pub accent: &'static str,
    pub translations: &'static Translations,
}

impl Language {
    /// All supported languages in catalog order (the intro-screen cycle order).
    pub fn all() -> &'static [Language] {
        LANGUAGES
    }

    /// Looks up a language by id. Total, since ids are a closed enum.
    pub fn get(id: LanguageId) -> &'static Language {
        match id {
            LanguageId::En => &LANGUAGES[0],
            LanguageId::Hi => &LANGUAGES[1],
            LanguageId::Od => &LANGUAGES[2],
        }
    }
}

/// Top-level translation table: marketing/home screen strings plus the
/// nested build-screen table.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub modal_title: &'static str,
    pub modal_subtitle: &'static str,
    pub info_text: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub badge: &'static str,
    pub heading1: &'static str,
    pub heading2: &'static str,
    pub create_resume: &'static str,
    pub view_templates: &'static str,
    pub stat1_number: &'static str,
    pub stat1_label: &'static str,
    pub stat2_number: &'static str,
    pub stat2_label: &'static str,
    pub build: BuildTranslations,
}

/// Strings for the multi-step build screen.
#[derive(Debug)]
pub struct BuildTranslations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub step1: &'static str,
    pub step2: &'static str,
    pub step3: &'static str,
    pub step4: &'static str,
    pub full_name: &'static str,
    pub full_name_placeholder: &'static str,
    pub age: &'static str,
    pub age_placeholder: &'static str,
    pub gender: &'static str,
    pub gender_placeholder: &'static str,
    pub phone: &'static str,
    pub phone_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub location: &'static str,
    pub location_placeholder: &'static str,
    pub job_type: &'static str,
    pub job_type_placeholder: &'static str,
    pub experience: &'static str,
    pub experience_placeholder: &'static str,
    pub employer: &'static str,
    pub employer_placeholder: &'static str,
    pub add_skills: &'static str,
    pub skills_placeholder: &'static str,
    pub add: &'static str,
    pub education_level: &'static str,
    pub education_placeholder: &'static str,
    pub summary: &'static str,
    pub summary_placeholder: &'static str,
    pub previous: &'static str,
    pub next_step: &'static str,
    pub save_draft: &'static str,
    pub preview_download: &'static str,
    pub draft_saved: &'static str,
    pub preview_ready: &'static str,
}

static EN: Translations = Translations {
    title: "Your Dream Job Starts Here",
    subtitle: "AI-powered resumes for electricians, drivers, plumbers, and skilled workers — in 5 minutes",
    modal_title: "Choose Language",
    modal_subtitle: "Pick your preferred language to continue",
    info_text: "You can always change your language later!",
    cancel: "Cancel",
    confirm: "Confirm",
    badge: "AI-Powered Resume Builder",
    heading1: "Your Dream Job",
    heading2: "Starts Here",
    create_resume: "Create Resume Free",
    view_templates: "View Templates",
    stat1_number: "10,000+",
    stat1_label: "Resumes Created",
    stat2_number: "100%",
    stat2_label: "Free Forever",
    build: BuildTranslations {
        title: "Build Your Professional Resume",
        subtitle: "Fill in your details and let AI do the magic",
        step1: "Basic Info",
        step2: "Professional",
        step3: "Skills",
        step4: "Education",
        full_name: "Full Name",
        full_name_placeholder: "Enter your full name",
        age: "Age",
        age_placeholder: "Your age",
        gender: "Gender",
        gender_placeholder: "Select gender",
        phone: "Phone Number",
        phone_placeholder: "+91 9876543210",
        email: "Email Address",
        email_placeholder: "your.email@example.com",
        location: "Location",
        location_placeholder: "City, State",
        job_type: "Job Type",
        job_type_placeholder: "Select your job type",
        experience: "Years of Experience",
        experience_placeholder: "0",
        employer: "Current/Previous Employer",
        employer_placeholder: "Company name",
        add_skills: "Add Your Skills",
        skills_placeholder: "Type a skill and press Enter",
        add: "Add",
        education_level: "Education Level",
        education_placeholder: "Select education level",
        summary: "Professional Summary",
        summary_placeholder: "Write a brief professional summary...",
        previous: "Previous",
        next_step: "Next Step",
        save_draft: "Save Draft",
        preview_download: "Preview & Download",
        draft_saved: "Draft saved successfully!",
        preview_ready: "Preview is ready!",
    },
};

static HI: Translations = Translations {
    title: "आपका सपना नौकरी यहाँ से शुरू होती है",
    subtitle: "इलेक्ट्रीशियन, ड्राइवर, प्लंबर और अन्य श्रमिकों के लिए एआई-संचालित रिज्यूमे — केवल 5 मिनट में",
    modal_title: "भाषा चुनें",
    modal_subtitle: "अपनी पसंदीदा भाषा चुनें",
    info_text: "आप इसे बाद में कभी भी बदल सकते हैं!",
    cancel: "रद्द करें",
    confirm: "पुष्टि करें",
    badge: "एआई रिज्यूमे बिल्डर",
    heading1: "आपकी सपनों की नौकरी",
    heading2: "यहाँ से शुरू होती है",
    create_resume: "मुफ़्त रिज्यूमे बनाएं",
    view_templates: "टेम्पलेट देखें",
    stat1_number: "10,000+",
    stat1_label: "बनाए गए रिज्यूमे",
    stat2_number: "100%",
    stat2_label: "हमेशा मुफ़्त",
    build: BuildTranslations {
        title: "अपना पेशेवर रिज्यूमे बनाएं",
        subtitle: "अपना विवरण भरें और एआई को जादू करने दें",
        step1: "बुनियादी जानकारी",
        step2: "पेशेवर",
        step3: "कौशल",
        step4: "शिक्षा",
        full_name: "पूरा नाम",
        full_name_placeholder: "अपना पूरा नाम दर्ज करें",
        age: "उम्र",
        age_placeholder: "आपकी उम्र",
        gender: "लिंग",
        gender_placeholder: "लिंग चुनें",
        phone: "फ़ोन नंबर",
        phone_placeholder: "+91 9876543210",
        email: "ईमेल पता",
        email_placeholder: "your.email@example.com",
        location: "स्थान",
        location_placeholder: "शहर, राज्य",
        job_type: "नौकरी का प्रकार",
        job_type_placeholder: "अपनी नौकरी का प्रकार चुनें",
        experience: "अनुभव के वर्ष",
        experience_placeholder: "0",
        employer: "वर्तमान/पिछला नियोक्ता",
        employer_placeholder: "कंपनी का नाम",
        add_skills: "अपने कौशल जोड़ें",
        skills_placeholder: "कौशल टाइप करें और एंटर दबाएं",
        add: "जोड़ें",
        education_level: "शिक्षा स्तर",
        education_placeholder: "शिक्षा स्तर चुनें",
        summary: "पेशेवर सारांश",
        summary_placeholder: "एक संक्षिप्त पेशेवर सारांश लिखें...",
        previous: "पिछला",
        next_step: "अगला कदम",
        save_draft: "ड्राफ्ट सहेजें",
        preview_download: "पूर्वावलोकन और डाउनलोड",
        draft_saved: "ड्राफ्ट सफलतापूर्वक सहेजा गया!",
        preview_ready: "पूर्वावलोकन तैयार है!",
    },
};

static OD: Translations = Translations {
    title: "ଆପଣଙ୍କ ସ୍ୱପ୍ନର କାମ ଏଠାରୁ ଆରମ୍ଭ ହୁଏ",
    subtitle: "ଇଲେକ୍ଟ୍ରିସିଆନ୍, ଡ୍ରାଇଭର୍, ପ୍ଲମ୍ବର୍ ଓ ଅନ୍ୟ କାରିଗରମାନଙ୍କ ପାଇଁ ଏଆଇ ରିଜ୍ୟୁମେ — 5 ମିନିଟ୍‌ରେ",
    modal_title: "ଭାଷା ବାଛନ୍ତୁ",
    modal_subtitle: "ଆପଣଙ୍କ ପସନ୍ଦର ଭାଷା ବାଛନ୍ତୁ",
    info_text: "ଆପଣ ପରେ କେବେ ମଧ୍ୟ ଏହାକୁ ବଦଳାଇପାରିବେ!",
    cancel: "ବାତିଲ୍",
    confirm: "ନିଶ୍ଚିତ କରନ୍ତୁ",
    badge: "ଏଆଇ ରିଜ୍ୟୁମେ ବିଲ୍ଡର୍",
    heading1: "ଆପଣଙ୍କ ସ୍ୱପ୍ନ ଚାକିରି",
    heading2: "ଏଠାରୁ ଆରମ୍ଭ ହୁଏ",
    create_resume: "ମାଗଣା ରିଜ୍ୟୁମେ ବନାନ୍ତୁ",
    view_templates: "ଟେମ୍ପଲେଟ୍‌ଗୁଡିକ ଦେଖନ୍ତୁ",
    stat1_number: "10,000+",
    stat1_label: "ତିଆରି ହୋଇଥିବା ରିଜ୍ୟୁମେ",
    stat2_number: "100%",
    stat2_label: "ସଦା ମାଗଣା",
    build: BuildTranslations {
        title: "ଆପଣଙ୍କ ପେଶାଦାର ରିଜ୍ୟୁମେ ବନାନ୍ତୁ",
        subtitle: "ଆପଣଙ୍କ ବିବରଣୀ ପୂରଣ କରନ୍ତୁ ଓ ଏଆଇକୁ ଯାଦୁ କରିବାକୁ ଦିଅନ୍ତୁ",
        step1: "ମୌଳିକ ସୂଚନା",
        step2: "ପେଶାଦାର",
        step3: "ଦକ୍ଷତା",
        step4: "ଶିକ୍ଷା",
        full_name: "ପୂର୍ଣ୍ଣ ନାମ",
        full_name_placeholder: "ଆପଣଙ୍କ ପୂର୍ଣ୍ଣ ନାମ ପ୍ରବେଶ କରନ୍ତୁ",
        age: "ବୟସ",
        age_placeholder: "ଆପଣଙ୍କ ବୟସ",
        gender: "ଲିଙ୍ଗ",
        gender_placeholder: "ଲିଙ୍ଗ ବାଛନ୍ତୁ",
        phone: "ଫୋନ୍ ନମ୍ବର",
        phone_placeholder: "+91 9876543210",
        email: "ଇମେଲ୍ ଠିକଣା",
        email_placeholder: "your.email@example.com",
        location: "ସ୍ଥାନ",
        location_placeholder: "ସହର, ରାଜ୍ୟ",
        job_type: "ଚାକିରି ପ୍ରକାର",
        job_type_placeholder: "ଆପଣଙ୍କ ଚାକିରି ପ୍ରକାର ବାଛନ୍ତୁ",
        experience: "ଅଭିଜ୍ଞତା ବର୍ଷ",
        experience_placeholder: "0",
        employer: "ବର୍ତ୍ତମାନ/ପୂର୍ବ ନିଯୁକ୍ତିଦାତା",
        employer_placeholder: "କମ୍ପାନୀ ନାମ",
        add_skills: "ଆପଣଙ୍କ ଦକ୍ଷତା ଯୋଡନ୍ତୁ",
        skills_placeholder: "ଦକ୍ଷତା ଟାଇପ୍ କରନ୍ତୁ ଏବଂ ଏଣ୍ଟର୍ ଦବାନ୍ତୁ",
        add: "ଯୋଡନ୍ତୁ",
        education_level: "ଶିକ୍ଷା ସ୍ତର",
        education_placeholder: "ଶିକ୍ଷା ସ୍ତର ବାଛନ୍ତୁ",
        summary: "ପେଶାଦାର ସାରାଂଶ",
        summary_placeholder: "ଏକ ସଂକ୍ଷିପ୍ତ ପେଶାଦାର ସାରାଂଶ ଲେଖନ୍ତୁ...",
        previous: "ପୂର୍ବ",
        next_step: "ପରବର୍ତ୍ତୀ ପଦକ୍ଷେପ",
        save_draft: "ଡ୍ରାଫ୍ଟ ସଂରକ୍ଷଣ କରନ୍ତୁ",
        preview_download: "ପୂର୍ବାବଲୋକନ ଓ ଡାଉନଲୋଡ୍",
        draft_saved: "ଡ୍ରାଫ୍ଟ ସଫଳତାର ସହିତ ସଂରକ୍ଷିତ!",
        preview_ready: "ପୂର୍ବାବଲୋକନ ପ୍ରସ୍ତୁତ!",
    },
};

static LANGUAGES: &[Language] = &[
    Language {
        id: LanguageId::En,
        name: "English",
        native_name: "English",
        flag: "🇬🇧",
        accent: "#3b82f6",
        translations: &EN,
    },
    Language {
        id: LanguageId::Hi,
        name: "Hindi",
        native_name: "हिन्दी",
        flag: "🇮🇳",
        accent: "#10b981",
        translations: &HI,
    },
    Language {
        id: LanguageId::Od,
        name: "Odia",
        native_name: "ଓଡ଼ିଆ",
        flag: "🇮🇳",
        accent: "#f59e0b",
        translations: &OD,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_languages_in_cycle_order() {
        let all = Language::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, LanguageId::En);
        assert_eq!(all[1].id, LanguageId::Hi);
        assert_eq!(all[2].id, LanguageId::Od);
    }

    #[test]
    fn test_ids_round_trip_through_strings() {
        for lang in Language::all() {
            let parsed: LanguageId = lang.id.as_str().parse().unwrap();
            assert_eq!(parsed, lang.id);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert!("fr".parse::<LanguageId>().is_err());
        assert!("".parse::<LanguageId>().is_err());
        assert!("EN".parse::<LanguageId>().is_err(), "ids are lowercase");
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(LanguageId::DEFAULT, LanguageId::En);
        assert_eq!(Language::get(LanguageId::DEFAULT).name, "English");
    }

    #[test]
    fn test_accent_colors_match_per_language_theme() {
        assert_eq!(Language::get(LanguageId::En).accent, "#3b82f6");
        assert_eq!(Language::get(LanguageId::Hi).accent, "#10b981");
        assert_eq!(Language::get(LanguageId::Od).accent, "#f59e0b");
    }

    #[test]
    fn test_step_labels_are_localized() {
        assert_eq!(Language::get(LanguageId::En).translations.build.step1, "Basic Info");
        assert_eq!(
            Language::get(LanguageId::Hi).translations.build.step1,
            "बुनियादी जानकारी"
        );
        assert_eq!(Language::get(LanguageId::Od).translations.build.step4, "ଶିକ୍ଷା");
    }
}
