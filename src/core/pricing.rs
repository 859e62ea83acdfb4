//! Static study package catalogue shown on the landing page.
//!
//! Prices are display data only; nothing here is used for payment.

/// Feature offered by at least one package
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackageFeature {
    pub id: &'static str,
    pub text: &'static str,
}

/// Every feature, in display order
pub const MASTER_FEATURES: &[PackageFeature] = &[
    PackageFeature { id: "tryout", text: "Akses Tryout SKD Premium" },
    PackageFeature { id: "video_discussion", text: "Pembahasan Soal via Video" },
    PackageFeature { id: "detailed_analysis", text: "Analisis Hasil & Peringkat Nasional" },
    PackageFeature { id: "discussion_group", text: "Grup Diskusi Eksklusif" },
    PackageFeature { id: "personal_consulting", text: "Konsultasi Personal 1-on-1" },
    PackageFeature { id: "interview_simulation", text: "Simulasi Wawancara" },
    PackageFeature { id: "guarantee", text: "Garansi Lulus*" },
];

/// A study package card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Price in rupiah; zero means free
    pub price: u64,
    pub original_price: Option<u64>,
    pub popular: bool,
    pub badge: Option<&'static str>,
    pub included_feature_ids: &'static [&'static str],
    /// Package-specific wording, keyed by feature id
    pub feature_descriptions: &'static [(&'static str, &'static str)],
}

pub const PACKAGES: &[Package] = &[
    Package {
        id: "1",
        title: "Paket Gratis",
        description: "Coba platform kami dengan pengalaman yang menyegarkan.",
        price: 0,
        original_price: None,
        popular: false,
        badge: Some("Gratis!"),
        included_feature_ids: &["tryout"],
        feature_descriptions: &[("tryout", "Akses 1x Tryout SKD")],
    },
    Package {
        id: "2",
        title: "Paket Premium",
        description: "Persiapan lengkap untuk hasil maksimal.",
        price: 99_000,
        original_price: Some(149_000),
        popular: true,
        badge: Some("Terlaris!"),
        included_feature_ids: &["tryout", "video_discussion", "detailed_analysis", "discussion_group"],
        feature_descriptions: &[
            ("tryout", "Akses 5x Tryout SKD"),
            ("video_discussion", "Pembahasan Soal via Video HD"),
        ],
    },
    Package {
        id: "3",
        title: "Paket Ultimate",
        description: "Paket terlengkap dengan bimbingan personal.",
        price: 199_000,
        original_price: Some(299_000),
        popular: false,
        badge: Some("Best Value!"),
        included_feature_ids: &[
            "tryout",
            "video_discussion",
            "detailed_analysis",
            "discussion_group",
            "personal_consulting",
            "interview_simulation",
            "guarantee",
        ],
        feature_descriptions: &[("tryout", "Akses 10x Tryout SKD")],
    },
];

/// A feature row as rendered on one package card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureLine {
    pub text: &'static str,
    pub included: bool,
}

impl Package {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    pub fn badge_label(&self) -> &'static str {
        self.badge
            .unwrap_or(if self.is_free() { "Gratis!" } else { "Premium!" })
    }

    pub fn cta_label(&self) -> &'static str {
        if self.is_free() { "Coba Gratis" } else { "Pilih Paket" }
    }

    /// Discount over the original price, when there is one.
    pub fn discount_percent(&self) -> Option<u64> {
        self.original_price
            .and_then(|original| discount_percent(self.price, original))
    }

    /// All master features with this package's wording and inclusion.
    pub fn feature_lines(&self) -> Vec<FeatureLine> {
        MASTER_FEATURES
            .iter()
            .map(|feature| {
                let text = self
                    .feature_descriptions
                    .iter()
                    .find(|(id, _)| *id == feature.id)
                    .map(|(_, text)| *text)
                    .unwrap_or(feature.text);
                FeatureLine {
                    text,
                    included: self.included_feature_ids.contains(&feature.id),
                }
            })
            .collect()
    }
}

/// Rounded savings percentage; `None` unless `original` exceeds `price`.
pub fn discount_percent(price: u64, original: u64) -> Option<u64> {
    if original <= price {
        return None;
    }
    let saved = (original - price) as f64;
    Some((saved / original as f64 * 100.0).round() as u64)
}

/// Format a rupiah amount the way `id-ID` does: `.` groups thousands.
/// Zero reads as `GRATIS`.
pub fn format_price(amount: u64) -> String {
    if amount == 0 {
        return "GRATIS".to_string();
    }

    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "GRATIS");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1.000");
        assert_eq!(format_price(99_000), "99.000");
        assert_eq!(format_price(1_234_567), "1.234.567");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(99_000, 149_000), Some(34));
        assert_eq!(discount_percent(199_000, 299_000), Some(33));
        assert_eq!(discount_percent(100, 100), None);
        assert_eq!(discount_percent(200, 100), None);
    }

    #[test]
    fn test_labels() {
        let free = &PACKAGES[0];
        assert!(free.is_free());
        assert_eq!(free.cta_label(), "Coba Gratis");
        assert_eq!(free.discount_percent(), None);

        let premium = Package {
            badge: None,
            ..PACKAGES[1]
        };
        assert_eq!(premium.badge_label(), "Premium!");
        assert_eq!(premium.cta_label(), "Pilih Paket");
    }

    #[test]
    fn test_feature_lines_use_overrides() {
        let premium = &PACKAGES[1];
        let lines = premium.feature_lines();

        assert_eq!(lines.len(), MASTER_FEATURES.len());
        assert_eq!(lines[0].text, "Akses 5x Tryout SKD");
        assert!(lines[0].included);
        assert_eq!(lines[1].text, "Pembahasan Soal via Video HD");
        assert_eq!(lines[4].text, "Konsultasi Personal 1-on-1");
        assert!(!lines[4].included);
    }

    #[test]
    fn test_single_popular_package() {
        assert_eq!(PACKAGES.iter().filter(|p| p.popular).count(), 1);
    }
}
