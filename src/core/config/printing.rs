use crate::core::config::data::Config;

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        println!("  target-language: {}", self.target_language());
        println!("  translate: {}", on_off(self.translate_enabled()));
        println!("  learn: {}", on_off(self.learn_enabled()));
        match self.request_timeout_secs {
            Some(secs) => println!("  request-timeout: {secs}s"),
            None => println!("  request-timeout: (unset)"),
        }
        match &self.translate_api_key {
            Some(_) => println!("  translate-api-key: (set)"),
            None => println!("  translate-api-key: (unset)"),
        }
        println!("  pubchem-url: {}", self.endpoints.pubchem());
        println!("  search-url: {}", self.endpoints.search());
        println!("  translate-url: {}", self.endpoints.translate());
        if self.answers.is_empty() {
            println!("  answers: (none set)");
        } else {
            println!("  answers:");
            let mut answers: Vec<_> = self.answers.iter().collect();
            answers.sort_by_key(|(question, _)| *question);
            for (question, answer) in answers {
                println!("    {question}: {answer}");
            }
        }
    }
}
