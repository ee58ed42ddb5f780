//! Human-readable explanation of a size recommendation.
//!
//! Pure string templating: identical inputs give byte-identical output for a
//! given language.

use serde::{Deserialize, Serialize};

use crate::models::{ConfidenceLevel, DataQuality, Size, SizeRecommendationResponse};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    /// Parse a two-letter tag; anything other than `vi` falls back to English
    pub fn from_tag(tag: &str) -> Language {
        match tag.trim().to_ascii_lowercase().as_str() {
            "vi" => Language::Vi,
            "en" => Language::En,
            other => {
                tracing::debug!("Unsupported language tag {:?}, using English", other);
                Language::En
            }
        }
    }
}

/// Template selected for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    HighComplete,
    HighPartial,
    MediumComplete,
    MediumPartial,
    Low,
    Generic,
}

fn select_template(level: ConfidenceLevel, quality: DataQuality) -> Template {
    let complete = match quality {
        DataQuality::Excellent | DataQuality::Good => true,
        DataQuality::Fair | DataQuality::Limited => false,
        DataQuality::Unknown => return Template::Generic,
    };

    match (level, complete) {
        (ConfidenceLevel::High, true) => Template::HighComplete,
        (ConfidenceLevel::High, false) => Template::HighPartial,
        (ConfidenceLevel::Medium, true) => Template::MediumComplete,
        (ConfidenceLevel::Medium, false) => Template::MediumPartial,
        (ConfidenceLevel::Low, _) => Template::Low,
        (ConfidenceLevel::Unknown, _) => Template::Generic,
    }
}

/// Confidence as a whole percentage, e.g. 0.75 -> "75"
fn percent(confidence: f64) -> String {
    format!("{:.0}", confidence * 100.0)
}

fn add_measurements_prompt(language: Language) -> String {
    match language {
        Language::En => {
            "Add your body measurements to get a personalized size recommendation.".to_string()
        }
        Language::Vi => {
            "Hãy thêm số đo cơ thể để nhận gợi ý kích cỡ phù hợp với bạn.".to_string()
        }
    }
}

fn insufficient_data(language: Language) -> String {
    match language {
        Language::En => {
            "Not enough data to recommend a size yet. Please review your measurements.".to_string()
        }
        Language::Vi => {
            "Chưa đủ dữ liệu để gợi ý kích cỡ. Vui lòng kiểm tra lại số đo của bạn.".to_string()
        }
    }
}

fn render(template: Template, size: Size, pct: &str, language: Language) -> String {
    match (language, template) {
        (Language::En, Template::HighComplete) => format!(
            "Size {size} should fit you well ({pct}% confidence), based on your complete measurements."
        ),
        (Language::En, Template::HighPartial) => {
            format!("Size {size} is a strong match for you ({pct}% confidence).")
        }
        (Language::En, Template::MediumComplete) => format!(
            "We recommend size {size} ({pct}% confidence) based on your measurements and fit preference."
        ),
        (Language::En, Template::MediumPartial) => format!(
            "Size {size} is likely to fit ({pct}% confidence). Adding chest, waist and hip measurements will improve accuracy."
        ),
        (Language::En, Template::Low) => format!(
            "Size {size} is our best estimate ({pct}% confidence). Check the size chart before ordering."
        ),
        (Language::En, Template::Generic) => {
            format!("Recommended size: {size} ({pct}% confidence).")
        }
        (Language::Vi, Template::HighComplete) => format!(
            "Size {size} sẽ vừa vặn với bạn (độ tin cậy {pct}%), dựa trên số đo đầy đủ của bạn."
        ),
        (Language::Vi, Template::HighPartial) => {
            format!("Size {size} rất phù hợp với bạn (độ tin cậy {pct}%).")
        }
        (Language::Vi, Template::MediumComplete) => format!(
            "Chúng tôi gợi ý size {size} (độ tin cậy {pct}%) dựa trên số đo và độ vừa vặn bạn mong muốn."
        ),
        (Language::Vi, Template::MediumPartial) => format!(
            "Size {size} có khả năng vừa với bạn (độ tin cậy {pct}%). Bổ sung số đo ngực, eo và hông sẽ giúp gợi ý chính xác hơn."
        ),
        (Language::Vi, Template::Low) => format!(
            "Size {size} là ước tính tốt nhất của chúng tôi (độ tin cậy {pct}%). Hãy tham khảo bảng size trước khi đặt hàng."
        ),
        (Language::Vi, Template::Generic) => {
            format!("Size gợi ý: {size} (độ tin cậy {pct}%).")
        }
    }
}

fn alternative_hint(size: Size, language: Language) -> String {
    match language {
        Language::En => format!(" You could also consider size {size}."),
        Language::Vi => format!(" Bạn cũng có thể cân nhắc size {size}."),
    }
}

/// Render the explanation shown next to a recommendation
pub fn format_reasoning(response: &SizeRecommendationResponse, language: Language) -> String {
    if !response.has_measurements {
        return add_measurements_prompt(language);
    }

    let (size, metadata) = match (response.recommended_size, response.metadata.as_ref()) {
        (Some(size), Some(metadata)) => (size, metadata),
        _ => return insufficient_data(language),
    };

    let template = select_template(metadata.confidence_level, metadata.data_quality);
    let mut text = render(template, size, &percent(response.confidence), language);

    if metadata.has_close_alternative {
        if let Some(alternative) = response.alternatives.first() {
            text.push_str(&alternative_hint(alternative.size, language));
        }
    }

    text
}
