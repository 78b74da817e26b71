// srm-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassDensity as UomMassDensity,
    MolarMass as UomMolarMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn kgpmol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v)
}

pub mod constants {
    use super::*;

    /// Universal gas constant [J / (mol K)]
    pub const R_UNIVERSAL: f64 = 8.314_462_618;

    /// Sea-level atmospheric pressure [Pa]
    pub const P_SEA_LEVEL_PA: f64 = 101_325.0;

    /// Reference burn rate for the propellant family [m/s]
    pub const BURN_RATE_REF_MPS: f64 = 3.19e-3;

    /// Chamber pressure at which the reference burn rate holds [Pa]
    pub const BURN_RATE_REF_PA: f64 = 8.26e6;

    #[inline]
    pub fn sea_level_pressure() -> Pressure {
        pa(P_SEA_LEVEL_PA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(1600.0);
        let _l = m(1.1);
        let _a = m2(3.9e-5);
        let _rho = kgpm3(1580.0);
        let _mm = kgpmol(0.0241);
        let _amb = constants::sea_level_pressure();
    }

    #[test]
    fn si_base_values() {
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(m(2.5).value, 2.5);
        assert_eq!(kgpm3(1580.0).value, 1580.0);
    }
}
