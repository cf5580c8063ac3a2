// src/domain/fields.rs

use std::collections::BTreeMap;

/// Every value a detail page can contribute to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Address,
    MapLink,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
    MonthlyFees,
    OneTimeFees,
    PetPolicy,
    Parking,
    Gym,
    Kitchen,
    Amenities,
    Features,
    LivingSpace,
    Lease,
    Services,
    PropertyInfo,
    Indoor,
    Outdoor,
    Description,
    // Neighbourhood metrics, kept on the record but not exported.
    Score,
    ScoreStatus,
    Airport,
    Traffic,
    Businesses,
    Neighbourhood,
    NeighbourhoodOverview,
}

impl Field {
    pub const ALL: [Field; 28] = [
        Field::Name,
        Field::Address,
        Field::MapLink,
        Field::OneBedroom,
        Field::TwoBedroom,
        Field::ThreeBedroom,
        Field::MonthlyFees,
        Field::OneTimeFees,
        Field::PetPolicy,
        Field::Parking,
        Field::Gym,
        Field::Kitchen,
        Field::Amenities,
        Field::Features,
        Field::LivingSpace,
        Field::Lease,
        Field::Services,
        Field::PropertyInfo,
        Field::Indoor,
        Field::Outdoor,
        Field::Description,
        Field::Score,
        Field::ScoreStatus,
        Field::Airport,
        Field::Traffic,
        Field::Businesses,
        Field::Neighbourhood,
        Field::NeighbourhoodOverview,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::MapLink => "map",
            Field::OneBedroom => "1bedroom",
            Field::TwoBedroom => "2bedroom",
            Field::ThreeBedroom => "3bedroom",
            Field::MonthlyFees => "monthFees",
            Field::OneTimeFees => "onceFees",
            Field::PetPolicy => "petPolicy",
            Field::Parking => "parking",
            Field::Gym => "gym",
            Field::Kitchen => "kitchen",
            Field::Amenities => "amenities",
            Field::Features => "features",
            Field::LivingSpace => "space",
            Field::Lease => "lease",
            Field::Services => "services",
            Field::PropertyInfo => "info",
            Field::Indoor => "indoor",
            Field::Outdoor => "outdoor",
            Field::Description => "description",
            Field::Score => "score",
            Field::ScoreStatus => "scoreStatus",
            Field::Airport => "airport",
            Field::Traffic => "traffic",
            Field::Businesses => "businesses",
            Field::Neighbourhood => "neighbourhood",
            Field::NeighbourhoodOverview => "neighbourhoodOverview",
        }
    }
}

/// The extracted values for one listing. Every `Field` is always present;
/// anything the page did not provide is the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    values: BTreeMap<Field, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        let values = Field::ALL
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_set_has_every_field_empty() {
        let fields = FieldSet::new();
        assert_eq!(fields.len(), Field::ALL.len());
        assert!(fields.iter().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn set_replaces_value() {
        let mut fields = FieldSet::new();
        fields.set(Field::Gym, "Fitness Center");
        assert_eq!(fields.get(Field::Gym), "Fitness Center");
        assert_eq!(fields.len(), Field::ALL.len());
    }
}
