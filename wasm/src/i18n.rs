//! Display text lookup for the dashboard
//!
//! Strings are looked up by key. A key missing from the requested locale
//! falls back to English, then to the key itself.

use shared::{AdvisoryKind, Locale};

/// Lookup of display text by key
pub trait Translator {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&'static str>;

    fn translate(&self, key: &str, locale: Locale) -> String {
        self.lookup(key, locale)
            .or_else(|| self.lookup(key, Locale::En))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

/// Built-in string table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

const EN: &[(&str, &str)] = &[
    ("advisory.irrigation_needed", "apply supplemental irrigation within 3 days"),
    ("advisory.moisture_sufficient", "soil moisture sufficient for ~5 days"),
    ("advisory.compost_recommended", "apply ~30kg/ha organic compost"),
    (
        "advisory.pest_monitoring",
        "scout fields weekly for pests and check leaf undersides for early damage",
    ),
    ("category.irrigation", "Irrigation"),
    ("category.fertilizer", "Fertilizer"),
    ("category.pest", "Pest"),
    ("label.yield", "Estimated yield"),
    ("label.confidence", "Confidence"),
    ("label.weather", "Weather"),
    ("label.soil", "Soil"),
    ("label.recommendations", "Recommendations"),
    ("unit.tons", "t"),
];

const HI: &[(&str, &str)] = &[
    ("advisory.irrigation_needed", "3 दिनों के भीतर पूरक सिंचाई करें"),
    ("advisory.moisture_sufficient", "मिट्टी की नमी लगभग 5 दिनों के लिए पर्याप्त है"),
    ("advisory.compost_recommended", "लगभग 30 किग्रा/हेक्टेयर जैविक खाद डालें"),
    (
        "advisory.pest_monitoring",
        "हर सप्ताह खेत में कीटों की जाँच करें और पत्तियों के निचले हिस्से देखें",
    ),
    ("category.irrigation", "सिंचाई"),
    ("category.fertilizer", "उर्वरक"),
    ("category.pest", "कीट"),
    ("label.yield", "अनुमानित उपज"),
    ("label.confidence", "विश्वसनीयता"),
    ("label.weather", "मौसम"),
    ("label.soil", "मिट्टी"),
    ("label.recommendations", "सिफारिशें"),
];

impl Translator for StaticCatalog {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&'static str> {
        let table = match locale {
            Locale::En => EN,
            Locale::Hi => HI,
        };
        table.iter().find(|(k, _)| *k == key).map(|(_, text)| *text)
    }
}

/// Localized text for an advisory
pub fn advisory_text(translator: &impl Translator, kind: AdvisoryKind, locale: Locale) -> String {
    translator.translate(kind.key(), locale)
}
