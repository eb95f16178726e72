use crate::options::Locale;

impl Locale {
    pub fn max_length_exceeded(self, max_length: usize) -> String {
        match self {
            Locale::Ja => format!("最大文字数は {max_length} 文字です"),
            Locale::En => format!("Maximum length is {max_length} characters"),
        }
    }

    pub fn not_a_number(self) -> String {
        match self {
            Locale::Ja => "数値を入力してください".to_string(),
            Locale::En => "Please enter a number".to_string(),
        }
    }

    pub fn precision_exceeded(self, precision: u32) -> String {
        match self {
            Locale::Ja => format!("整数部は {precision} 桁以内で入力してください"),
            Locale::En => format!("The integer part must have at most {precision} digits"),
        }
    }

    pub fn scale_exceeded(self, scale: u32) -> String {
        match self {
            Locale::Ja => format!("小数部は {scale} 桁以内で入力してください"),
            Locale::En => format!("The decimal part must have at most {scale} digits"),
        }
    }

    pub fn invalid_date(self) -> String {
        match self {
            Locale::Ja => "有効な日付を入力してください".to_string(),
            Locale::En => "Please enter a valid date".to_string(),
        }
    }

    pub fn invalid_date_time(self) -> String {
        match self {
            Locale::Ja => "有効な日時を入力してください".to_string(),
            Locale::En => "Please enter a valid date and time".to_string(),
        }
    }

    pub fn select_option(self) -> String {
        match self {
            Locale::Ja => "選択肢を選んでください".to_string(),
            Locale::En => "Please select an option".to_string(),
        }
    }

    pub fn validation_failed(self) -> String {
        match self {
            Locale::Ja => "バリデーションエラーが発生しました".to_string(),
            Locale::En => "A validation error occurred".to_string(),
        }
    }

    /// Status line shown by a host for one field.
    pub fn status_line(self, is_valid: bool, error_message: &str) -> String {
        match (is_valid, self) {
            (true, Locale::Ja) => "✓ 有効".to_string(),
            (true, Locale::En) => "✓ valid".to_string(),
            (false, _) => format!("✗ {error_message}"),
        }
    }
}
