use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A chemical element of the periodic table.
///
/// Elements are only obtained through [`Element::from_symbol`] or [`FromStr`],
/// so every value of this type refers to a recognized element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown chemical element symbol: '{0}'")]
pub struct UnknownElementError(pub String);

const fn el(atomic_number: u8, symbol: &'static str, name: &'static str) -> Element {
    Element {
        atomic_number,
        symbol,
        name,
    }
}

static ELEMENTS: Map<&'static str, Element> = phf_map! {
    "H" => el(1, "H", "Hydrogen"),
    "He" => el(2, "He", "Helium"),
    "Li" => el(3, "Li", "Lithium"),
    "Be" => el(4, "Be", "Beryllium"),
    "B" => el(5, "B", "Boron"),
    "C" => el(6, "C", "Carbon"),
    "N" => el(7, "N", "Nitrogen"),
    "O" => el(8, "O", "Oxygen"),
    "F" => el(9, "F", "Fluorine"),
    "Ne" => el(10, "Ne", "Neon"),
    "Na" => el(11, "Na", "Sodium"),
    "Mg" => el(12, "Mg", "Magnesium"),
    "Al" => el(13, "Al", "Aluminium"),
    "Si" => el(14, "Si", "Silicon"),
    "P" => el(15, "P", "Phosphorus"),
    "S" => el(16, "S", "Sulfur"),
    "Cl" => el(17, "Cl", "Chlorine"),
    "Ar" => el(18, "Ar", "Argon"),
    "K" => el(19, "K", "Potassium"),
    "Ca" => el(20, "Ca", "Calcium"),
    "Sc" => el(21, "Sc", "Scandium"),
    "Ti" => el(22, "Ti", "Titanium"),
    "V" => el(23, "V", "Vanadium"),
    "Cr" => el(24, "Cr", "Chromium"),
    "Mn" => el(25, "Mn", "Manganese"),
    "Fe" => el(26, "Fe", "Iron"),
    "Co" => el(27, "Co", "Cobalt"),
    "Ni" => el(28, "Ni", "Nickel"),
    "Cu" => el(29, "Cu", "Copper"),
    "Zn" => el(30, "Zn", "Zinc"),
    "Ga" => el(31, "Ga", "Gallium"),
    "Ge" => el(32, "Ge", "Germanium"),
    "As" => el(33, "As", "Arsenic"),
    "Se" => el(34, "Se", "Selenium"),
    "Br" => el(35, "Br", "Bromine"),
    "Kr" => el(36, "Kr", "Krypton"),
    "Rb" => el(37, "Rb", "Rubidium"),
    "Sr" => el(38, "Sr", "Strontium"),
    "Y" => el(39, "Y", "Yttrium"),
    "Zr" => el(40, "Zr", "Zirconium"),
    "Nb" => el(41, "Nb", "Niobium"),
    "Mo" => el(42, "Mo", "Molybdenum"),
    "Tc" => el(43, "Tc", "Technetium"),
    "Ru" => el(44, "Ru", "Ruthenium"),
    "Rh" => el(45, "Rh", "Rhodium"),
    "Pd" => el(46, "Pd", "Palladium"),
    "Ag" => el(47, "Ag", "Silver"),
    "Cd" => el(48, "Cd", "Cadmium"),
    "In" => el(49, "In", "Indium"),
    "Sn" => el(50, "Sn", "Tin"),
    "Sb" => el(51, "Sb", "Antimony"),
    "Te" => el(52, "Te", "Tellurium"),
    "I" => el(53, "I", "Iodine"),
    "Xe" => el(54, "Xe", "Xenon"),
    "Cs" => el(55, "Cs", "Caesium"),
    "Ba" => el(56, "Ba", "Barium"),
    "La" => el(57, "La", "Lanthanum"),
    "Ce" => el(58, "Ce", "Cerium"),
    "Pr" => el(59, "Pr", "Praseodymium"),
    "Nd" => el(60, "Nd", "Neodymium"),
    "Pm" => el(61, "Pm", "Promethium"),
    "Sm" => el(62, "Sm", "Samarium"),
    "Eu" => el(63, "Eu", "Europium"),
    "Gd" => el(64, "Gd", "Gadolinium"),
    "Tb" => el(65, "Tb", "Terbium"),
    "Dy" => el(66, "Dy", "Dysprosium"),
    "Ho" => el(67, "Ho", "Holmium"),
    "Er" => el(68, "Er", "Erbium"),
    "Tm" => el(69, "Tm", "Thulium"),
    "Yb" => el(70, "Yb", "Ytterbium"),
    "Lu" => el(71, "Lu", "Lutetium"),
    "Hf" => el(72, "Hf", "Hafnium"),
    "Ta" => el(73, "Ta", "Tantalum"),
    "W" => el(74, "W", "Tungsten"),
    "Re" => el(75, "Re", "Rhenium"),
    "Os" => el(76, "Os", "Osmium"),
    "Ir" => el(77, "Ir", "Iridium"),
    "Pt" => el(78, "Pt", "Platinum"),
    "Au" => el(79, "Au", "Gold"),
    "Hg" => el(80, "Hg", "Mercury"),
    "Tl" => el(81, "Tl", "Thallium"),
    "Pb" => el(82, "Pb", "Lead"),
    "Bi" => el(83, "Bi", "Bismuth"),
    "Po" => el(84, "Po", "Polonium"),
    "At" => el(85, "At", "Astatine"),
    "Rn" => el(86, "Rn", "Radon"),
    "Fr" => el(87, "Fr", "Francium"),
    "Ra" => el(88, "Ra", "Radium"),
    "Ac" => el(89, "Ac", "Actinium"),
    "Th" => el(90, "Th", "Thorium"),
    "Pa" => el(91, "Pa", "Protactinium"),
    "U" => el(92, "U", "Uranium"),
    "Np" => el(93, "Np", "Neptunium"),
    "Pu" => el(94, "Pu", "Plutonium"),
    "Am" => el(95, "Am", "Americium"),
    "Cm" => el(96, "Cm", "Curium"),
    "Bk" => el(97, "Bk", "Berkelium"),
    "Cf" => el(98, "Cf", "Californium"),
    "Es" => el(99, "Es", "Einsteinium"),
    "Fm" => el(100, "Fm", "Fermium"),
    "Md" => el(101, "Md", "Mendelevium"),
    "No" => el(102, "No", "Nobelium"),
    "Lr" => el(103, "Lr", "Lawrencium"),
    "Rf" => el(104, "Rf", "Rutherfordium"),
    "Db" => el(105, "Db", "Dubnium"),
    "Sg" => el(106, "Sg", "Seaborgium"),
    "Bh" => el(107, "Bh", "Bohrium"),
    "Hs" => el(108, "Hs", "Hassium"),
    "Mt" => el(109, "Mt", "Meitnerium"),
    "Ds" => el(110, "Ds", "Darmstadtium"),
    "Rg" => el(111, "Rg", "Roentgenium"),
    "Cn" => el(112, "Cn", "Copernicium"),
    "Nh" => el(113, "Nh", "Nihonium"),
    "Fl" => el(114, "Fl", "Flerovium"),
    "Mc" => el(115, "Mc", "Moscovium"),
    "Lv" => el(116, "Lv", "Livermorium"),
    "Ts" => el(117, "Ts", "Tennessine"),
    "Og" => el(118, "Og", "Oganesson"),
};

impl Element {
    /// Looks up an element by its case-sensitive symbol (e.g. `"N"`, `"Cu"`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        ELEMENTS.get(symbol).copied()
    }

    pub fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The English element name, e.g. `"Nitrogen"`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl FromStr for Element {
    type Err = UnknownElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
