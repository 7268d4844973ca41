mod examples;
mod property_roundtrip;
