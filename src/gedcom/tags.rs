//! GEDCOM tag constants and the event / marriage lookup tables.
//!
//! Tag choices follow the GeneWeb GEDCOM exporter: standard GEDCOM tags where
//! one exists, otherwise a custom label rendered as `EVEN` + `TYPE <label>`.

use crate::gwdb::types::error::{GwdbError, Result};
use crate::gwdb::types::models::MarriageType;

/// GEDCOM 5.5.5 tags used by the exporter.
pub mod tag {
    pub const HEAD: &str = "HEAD";
    pub const TRLR: &str = "TRLR";
    pub const GEDC: &str = "GEDC";
    pub const VERS: &str = "VERS";
    pub const FORM: &str = "FORM";
    pub const CHAR: &str = "CHAR";
    pub const SOUR: &str = "SOUR";
    pub const CORP: &str = "CORP";
    pub const WWW: &str = "WWW";
    pub const FILE: &str = "FILE";
    pub const TIME: &str = "TIME";

    pub const INDI: &str = "INDI";
    pub const FAM: &str = "FAM";
    pub const NAME: &str = "NAME";
    pub const SEX: &str = "SEX";
    pub const NICK: &str = "NICK";
    pub const SURN: &str = "SURN";
    pub const OCCU: &str = "OCCU";
    pub const TITL: &str = "TITL";
    pub const FAMC: &str = "FAMC";
    pub const FAMS: &str = "FAMS";
    pub const HUSB: &str = "HUSB";
    pub const WIFE: &str = "WIFE";
    pub const CHIL: &str = "CHIL";

    pub const DATE: &str = "DATE";
    pub const PLAC: &str = "PLAC";
    pub const TYPE: &str = "TYPE";
    pub const EVEN: &str = "EVEN";

    pub const NOTE: &str = "NOTE";
    pub const CONT: &str = "CONT";
    pub const CONC: &str = "CONC";

    pub const MARR: &str = "MARR";
    pub const DIV: &str = "DIV";
}

/// How an event code is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    /// A standard GEDCOM event tag.
    Standard(&'static str),
    /// No standard equivalent: `EVEN` with a `TYPE` child carrying the label.
    Custom(&'static str),
    /// Nothing to emit.
    Unknown,
}

/// Event codes at or above this value belong to families, not individuals.
pub const FAMILY_EVENT_THRESHOLD: u32 = 50;

/// Event-name codes of the record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    Birth = 0,
    Baptism = 1,
    Death = 2,
    Burial = 3,
    Cremation = 4,
    Accomplishment = 5,
    Acquisition = 6,
    Adhesion = 7,
    BaptismLds = 8,
    BarMitzvah = 9,
    BatMitzvah = 10,
    Benediction = 11,
    ChangeName = 12,
    Circumcision = 13,
    Confirmation = 14,
    ConfirmationLds = 15,
    Decoration = 16,
    MilitaryDemobilisation = 17,
    Diploma = 18,
    Distinction = 19,
    Dotation = 20,
    DotationLds = 21,
    Education = 22,
    Election = 23,
    Emigration = 24,
    Excommunication = 25,
    FamilyLinkLds = 26,
    FirstCommunion = 27,
    Funeral = 28,
    Graduate = 29,
    Hospitalisation = 30,
    Illness = 31,
    Immigration = 32,
    PassengerList = 33,
    MilitaryDistinction = 34,
    MilitaryPromotion = 35,
    MilitaryService = 36,
    MilitaryMobilisation = 37,
    Naturalisation = 38,
    Occupation = 39,
    Ordination = 40,
    Property = 41,
    Census = 42,
    Residence = 43,
    Retired = 44,
    SealingChildLds = 45,
    SealingParentLds = 46,
    SealingSpouseLds = 47,
    PropertySale = 48,
    Will = 49,
    Marriage = 50,
    NoMarriage = 51,
    NoMention = 52,
    Engagement = 53,
    Divorce = 54,
    Separated = 55,
    Annulment = 56,
    MarriageBann = 57,
    MarriageContract = 58,
    MarriageLicense = 59,
    Pacs = 60,
    FamilyResidence = 61,
}

/// All event names, ordered by code.
const EVENT_NAMES: [EventName; 62] = [
    EventName::Birth,
    EventName::Baptism,
    EventName::Death,
    EventName::Burial,
    EventName::Cremation,
    EventName::Accomplishment,
    EventName::Acquisition,
    EventName::Adhesion,
    EventName::BaptismLds,
    EventName::BarMitzvah,
    EventName::BatMitzvah,
    EventName::Benediction,
    EventName::ChangeName,
    EventName::Circumcision,
    EventName::Confirmation,
    EventName::ConfirmationLds,
    EventName::Decoration,
    EventName::MilitaryDemobilisation,
    EventName::Diploma,
    EventName::Distinction,
    EventName::Dotation,
    EventName::DotationLds,
    EventName::Education,
    EventName::Election,
    EventName::Emigration,
    EventName::Excommunication,
    EventName::FamilyLinkLds,
    EventName::FirstCommunion,
    EventName::Funeral,
    EventName::Graduate,
    EventName::Hospitalisation,
    EventName::Illness,
    EventName::Immigration,
    EventName::PassengerList,
    EventName::MilitaryDistinction,
    EventName::MilitaryPromotion,
    EventName::MilitaryService,
    EventName::MilitaryMobilisation,
    EventName::Naturalisation,
    EventName::Occupation,
    EventName::Ordination,
    EventName::Property,
    EventName::Census,
    EventName::Residence,
    EventName::Retired,
    EventName::SealingChildLds,
    EventName::SealingParentLds,
    EventName::SealingSpouseLds,
    EventName::PropertySale,
    EventName::Will,
    EventName::Marriage,
    EventName::NoMarriage,
    EventName::NoMention,
    EventName::Engagement,
    EventName::Divorce,
    EventName::Separated,
    EventName::Annulment,
    EventName::MarriageBann,
    EventName::MarriageContract,
    EventName::MarriageLicense,
    EventName::Pacs,
    EventName::FamilyResidence,
];

impl EventName {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_family_event(self) -> bool {
        self.code() >= FAMILY_EVENT_THRESHOLD
    }

    /// The output tag for this event.
    pub fn tag(self) -> EventTag {
        use EventName::*;
        use EventTag::{Custom, Standard, Unknown};
        match self {
            Birth => Standard("BIRT"),
            Baptism => Standard("BAPM"),
            Death => Standard("DEAT"),
            Burial => Standard("BURI"),
            Cremation => Standard("CREM"),
            Accomplishment => Custom("Accomplishment"),
            Acquisition => Custom("Acquisition"),
            Adhesion => Custom("Membership"),
            BaptismLds => Standard("BAPL"),
            BarMitzvah => Standard("BARM"),
            BatMitzvah => Standard("BASM"),
            Benediction => Standard("BLES"),
            ChangeName => Custom("Name change"),
            Circumcision => Custom("Circumcision"),
            Confirmation => Standard("CONF"),
            ConfirmationLds => Standard("CONL"),
            Decoration => Custom("Award"),
            MilitaryDemobilisation => Custom("Military discharge"),
            Diploma => Custom("Degree"),
            Distinction => Custom("Distinction"),
            Dotation => Standard("ENDL"),
            DotationLds => Custom("Dotation LDS"),
            Education => Standard("EDUC"),
            Election => Custom("Election"),
            Emigration => Standard("EMIG"),
            Excommunication => Custom("Excommunication"),
            FamilyLinkLds => Custom("Family link LDS"),
            FirstCommunion => Standard("FCOM"),
            Funeral => Custom("Funeral"),
            Graduate => Standard("GRAD"),
            Hospitalisation => Custom("Hospitalization"),
            Illness => Custom("Illness"),
            Immigration => Standard("IMMI"),
            PassengerList => Custom("Passenger list"),
            MilitaryDistinction => Custom("Military distinction"),
            MilitaryPromotion => Custom("Military promotion"),
            MilitaryService => Custom("Military service"),
            MilitaryMobilisation => Custom("Military mobilization"),
            Naturalisation => Standard("NATU"),
            Occupation => Standard("OCCU"),
            Ordination => Standard("ORDN"),
            Property => Standard("PROP"),
            Census => Standard("CENS"),
            Residence => Standard("RESI"),
            Retired => Standard("RETI"),
            SealingChildLds => Standard("SLGC"),
            SealingParentLds => Custom("Sealing parent LDS"),
            SealingSpouseLds => Standard("SLGS"),
            PropertySale => Custom("Property sale"),
            Will => Standard("WILL"),
            Marriage => Standard("MARR"),
            NoMarriage => Unknown,
            NoMention => Custom("No mention"),
            Engagement => Standard("ENGA"),
            Divorce => Standard("DIV"),
            Separated => Custom("Separated"),
            Annulment => Standard("ANUL"),
            MarriageBann => Standard("MARB"),
            MarriageContract => Standard("MARC"),
            MarriageLicense => Standard("MARL"),
            Pacs => Custom("PACS"),
            FamilyResidence => Custom("Residence"),
        }
    }
}

impl TryFrom<u32> for EventName {
    type Error = GwdbError;
    fn try_from(value: u32) -> Result<Self> {
        EVENT_NAMES
            .get(value as usize)
            .copied()
            .ok_or(GwdbError::UnknownCode { what: "event name", code: value })
    }
}

/// Looks up the output tag of a raw event code. Unmapped codes are `Unknown`.
pub fn event_tag(code: u32) -> EventTag {
    EventName::try_from(code)
        .map(EventName::tag)
        .unwrap_or(EventTag::Unknown)
}

/// The output tag of a marriage type. Not-married types are `Unknown` so no
/// marriage event is emitted for them.
pub fn marriage_tag(marriage_type: MarriageType) -> EventTag {
    use EventTag::{Custom, Standard, Unknown};
    match marriage_type {
        MarriageType::Married | MarriageType::NoSexesCheckMarried => Standard("MARR"),
        MarriageType::NotMarried | MarriageType::NoSexesCheckNotMarried => Unknown,
        MarriageType::Engaged => Standard("ENGA"),
        MarriageType::NoMention => Custom("No mention"),
        MarriageType::MarriageBann => Standard("MARB"),
        MarriageType::MarriageContract => Standard("MARC"),
        MarriageType::MarriageLicense => Standard("MARL"),
        MarriageType::Pacs => Custom("PACS"),
        MarriageType::Residence => Custom("Residence"),
    }
}
