// File: src/core/catalog.rs
//! The fixed vocabulary of the tables: verb kinds and their verbs, tenses,
//! persons with their pronouns, and the three number forms.
use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Generates `as_str`, `FromStr` and `Display` over the wire ids used in the
/// CSV files and the selections file.
macro_rules! wire_ids {
    ($ty:ident, $what:literal, { $($variant:ident => $id:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $id),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok($ty::$variant),)+
                    other => Err(CatalogError::Unknown { what: $what, id: other.to_string() }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Salim,
    Muz,
    Mudaaf,
    Ajvaf,
}

wire_ids!(Kind, "kind", {
    Salim => "salim",
    Muz => "muz",
    Mudaaf => "mudaaf",
    Ajvaf => "ajvaf",
});

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Salim => "سَالِمٌ",
            Kind::Muz => "مُعْتَلٌّ",
            Kind::Mudaaf => "مُضَاعَفٌ",
            Kind::Ajvaf => "أَجْوَفُ",
        }
    }

    /// Verbs of this kind, in the order their data files are numbered.
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            Kind::Salim => &["كَتَبَ", "دَخَلَ", "ذَهَبَ"],
            Kind::Muz => &["اَخَذَ"],
            Kind::Mudaaf => &["سَدَّ", "فَرَّ"],
            Kind::Ajvaf => &[],
        }
    }

    /// Kinds that have at least one verb to show.
    pub fn available() -> impl Iterator<Item = Kind> {
        Kind::ALL.iter().copied().filter(|kind| !kind.verbs().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Mazi,
    MaziManfiMa,
    MaziManfiLam,
    Muzari,
    MuzariManfi,
    Amr,
    AmrManfi,
    MustaqbalQarib,
    MustaqbalBaeed,
    MustaqbalManfi,
}

wire_ids!(Tense, "tense", {
    Mazi => "mazi",
    MaziManfiMa => "mazi-manfi-ma",
    MaziManfiLam => "mazi-manfi-lam",
    Muzari => "muzari",
    MuzariManfi => "muzari-manfi",
    Amr => "amr",
    AmrManfi => "amr-manfi",
    MustaqbalQarib => "mustaqbal-qarib",
    MustaqbalBaeed => "mustaqbal-baeed",
    MustaqbalManfi => "mustaqbal-manfi",
});

impl Tense {
    pub fn name(self) -> &'static str {
        match self {
            Tense::Mazi => "المَاضِي",
            Tense::MaziManfiMa => "المَاضِي المَنْفِي بِمَا",
            Tense::MaziManfiLam => "المَاضِي المَنْفِي بِلَمْ",
            Tense::Muzari => "المُضَارِعُ",
            Tense::MuzariManfi => "المُضَارِعُ المَنْفِي",
            Tense::Amr => "الأَمْرُ",
            Tense::AmrManfi => "الأَمْرُ المَنْفِي",
            Tense::MustaqbalQarib => "المُسْتَقْبَلُ القَرِيبُ",
            Tense::MustaqbalBaeed => "المُسْتَقْبَلُ البَعِيدُ",
            Tense::MustaqbalManfi => "المُسْتَقْبَلُ المَنْفِي",
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(
            self,
            Tense::MaziManfiMa
                | Tense::MaziManfiLam
                | Tense::MuzariManfi
                | Tense::AmrManfi
                | Tense::MustaqbalManfi
        )
    }

    /// Tenses that open a new group in the tense picker.
    pub fn has_divider_before(self) -> bool {
        matches!(self, Tense::Muzari | Tense::Amr | Tense::MustaqbalQarib)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    FirstSpeaker,
    SecondMasculine,
    SecondFeminine,
    SecondMasculineModern,
    SecondFeminineModern,
    ThirdMasculine,
    ThirdFeminine,
}

// Declaration order is the row order of the table.
wire_ids!(Person, "person", {
    FirstSpeaker => "1-mutekellim",
    SecondMasculine => "2-muzekker",
    SecondFeminine => "2-muennes",
    SecondMasculineModern => "2-muzekker-hadis",
    SecondFeminineModern => "2-muennes-hadis",
    ThirdMasculine => "3-muzekker",
    ThirdFeminine => "3-muennes",
});

impl Person {
    pub fn name(self) -> &'static str {
        match self {
            Person::FirstSpeaker => "المُتَكَلِّمُ",
            Person::SecondMasculine => "المُخَاطَبُ المُذَكَّرُ",
            Person::SecondFeminine => "المُخَاطَبَةُ المُؤَنَّثَةُ",
            Person::SecondMasculineModern => "المُخَاطَبُ المُذَكَّرُ (حَدِيثٌ)",
            Person::SecondFeminineModern => "المُخَاطَبَةُ المُؤَنَّثَةُ (حَدِيثٌ)",
            Person::ThirdMasculine => "الغَائِبُ المُذَكَّرُ",
            Person::ThirdFeminine => "الغَائِبَةُ المُؤَنَّثَةُ",
        }
    }

    /// Pronouns (zamirs) by column. The first person has only two: singular
    /// and the plural that also stands for the dual.
    pub fn pronouns(self) -> &'static [&'static str] {
        match self {
            Person::FirstSpeaker => &["أَنَا", "نَحْنُ"],
            Person::SecondMasculine | Person::SecondMasculineModern => {
                &["أَنْتَ", "أَنْتُمَا", "أَنْتُمْ"]
            }
            Person::SecondFeminine | Person::SecondFeminineModern => {
                &["أَنْتِ", "أَنْتُمَا", "أَنْتُنَّ"]
            }
            Person::ThirdMasculine => &["هُوَ", "هُمَا", "هُمْ"],
            Person::ThirdFeminine => &["هِيَ", "هُمَا", "هُنَّ"],
        }
    }

    /// Grammatical person number, the part of the id before the first hyphen.
    pub fn number(self) -> &'static str {
        match self.as_str().split_once('-') {
            Some((number, _)) => number,
            None => self.as_str(),
        }
    }

    /// The first person and every masculine person open a table section.
    pub fn starts_section(self) -> bool {
        self == Person::FirstSpeaker || self.as_str().ends_with("muzekker")
    }

    /// The first person has no separate dual; its plural spans both columns.
    pub fn merges_dual(self) -> bool {
        self == Person::FirstSpeaker
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Ferd,
    Tesniye,
    Cem,
}

wire_ids!(Form, "form", {
    Ferd => "ferd",
    Tesniye => "tesniye",
    Cem => "cem",
});

impl Form {
    pub fn name(self) -> &'static str {
        match self {
            Form::Ferd => "مُفْرَدٌ",
            Form::Tesniye => "تَثْنِيَةٌ",
            Form::Cem => "جَمْعٌ",
        }
    }
}
