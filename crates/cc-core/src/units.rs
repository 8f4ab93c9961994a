// cc-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn in_liters(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

#[inline]
pub fn in_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn in_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Fahrenheit degrees per Celsius degree.
    pub const F_PER_C: f64 = 9.0 / 5.0;

    /// Fahrenheit reading at the freezing point of water.
    pub const F_AT_ZERO_C: f64 = 32.0;

    pub const LITERS_PER_M3: f64 = 1000.0;
}
