use super::KnowledgeEntry;

/// Returned when no entry matches.
pub const FALLBACK_PASSAGE: &str = "I'm your Pumps and Compressors learning assistant! \
I can help with topics like pump operation, compressor types, cavitation, \
efficiency calculations, and safety procedures. \
Please ask me specific questions about these topics.";

/// Checked in order; the first entry with a matching keyword wins.
pub const KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        topic: "Pump Types and Fundamentals",
        keywords: &["pump", "centrifugal", "positive displacement", "impeller", "casing", "volute", "bep"],
        passage: PUMPS,
    },
    KnowledgeEntry {
        topic: "Compressor Types and Components",
        keywords: &["compressor", "reciprocating", "centrifugal", "rotary", "screw", "surge", "intercooler"],
        passage: COMPRESSORS,
    },
    KnowledgeEntry {
        topic: "Measurement Devices",
        keywords: &["measurement", "pressure", "flow", "temperature", "venturi", "transducer", "gauge"],
        passage: MEASUREMENT,
    },
    KnowledgeEntry {
        topic: "Safety Procedures",
        keywords: &["safety", "startup", "shutdown", "lockout", "tagout", "procedure", "maintenance"],
        passage: SAFETY,
    },
    KnowledgeEntry {
        topic: "Cavitation and Pump Safety",
        keywords: &["cavitation", "npsh", "bubbles", "noise", "vibration", "suction"],
        passage: CAVITATION,
    },
    KnowledgeEntry {
        topic: "Performance Calculations",
        keywords: &["efficiency", "power", "calculation", "performance", "curve", "hydraulic"],
        passage: PERFORMANCE,
    },
];

const PUMPS: &str = "Centrifugal pumps use rotational energy from an impeller to move fluid by converting rotational kinetic energy to hydrodynamic energy.\x20\n\
\n\
Key Components:\n\
- Impeller: Rotating component that imparts energy to fluid\n\
- Volute Casing: Converts velocity energy to pressure energy\n\
- Shaft: Transmits power from motor to impeller\n\
- Seals: Prevent leakage\n\
\n\
Positive displacement pumps move fluid by trapping a fixed amount and forcing it through the system. Types include piston pumps, gear pumps, and diaphragm pumps.\n\
\n\
Best Efficiency Point (BEP) is where the pump operates most efficiently with minimal vibration and cavitation.";

const COMPRESSORS: &str = "Compressors increase gas pressure by reducing volume.\x20\n\
\n\
Centrifugal Compressors:\n\
- Use high-speed impellers\n\
- Suitable for high flow, low pressure applications\n\
- Provide continuous, pulsation-free flow\n\
- Can experience surge at low flow conditions\n\
\n\
Positive Displacement Compressors:\n\
Reciprocating: Use pistons in cylinders, suitable for high pressure\n\
Rotary Screw: Use meshing screws, good for medium pressure\n\
Rotary Vane: Use sliding vanes in rotor\n\
\n\
Key Components:\n\
- Intercoolers: Cool gas between stages to reduce power\n\
- Aftercoolers: Cool discharge gas\n\
- Safety valves: Prevent overpressure\n\
- Moisture separators: Remove condensate";

const MEASUREMENT: &str = "Common Measurement Devices:\n\
\n\
Pressure Measurement:\n\
- Bourdon Tube Gauges: Mechanical, for local indication\n\
- Pressure Transducers: Convert pressure to electrical signal\n\
- Differential Pressure Transmitters: Measure pressure difference\n\
\n\
Flow Measurement:\n\
- Venturi Tubes: Use Bernoulli's principle, high accuracy\n\
- Orifice Plates: Simple, cost-effective\n\
- Magnetic Flow Meters: For conductive fluids\n\
- Ultrasonic Flow Meters: Non-intrusive\n\
\n\
Temperature Measurement:\n\
- RTDs (Resistance Temperature Detectors): High accuracy\n\
- Thermocouples: Wide temperature range\n\
- Thermistors: High sensitivity\n\
\n\
All devices require proper calibration and installation for accurate measurements.";

const SAFETY: &str = "Safe Pump/Compressor Operation Procedures:\n\
\n\
Startup Sequence:\n\
1. Check lubrication levels and conditions\n\
2. Verify valve positions (suction open, discharge closed)\n\
3. Check coupling alignment and guards\n\
4. Ensure proper ventilation\n\
5. Verify all safety devices are functional\n\
6. Start pump/compressor\n\
7. Gradually open discharge valve\n\
\n\
Shutdown Sequence:\n\
1. Gradually reduce load\n\
2. Close discharge valve\n\
3. Stop motor\n\
4. Isolate equipment with valves\n\
5. Lockout/Tagout for maintenance\n\
\n\
Safety Protocols:\n\
- Always use Lockout/Tagout during maintenance\n\
- Wear appropriate PPE\n\
- Follow manufacturer's instructions\n\
- Regular inspection and maintenance\n\
- Pressure testing as required";

const CAVITATION: &str = "Cavitation occurs when liquid pressure drops below vapor pressure, causing vapor bubbles to form and collapse violently.\n\
\n\
Causes:\n\
- Low suction pressure\n\
- High fluid temperature\n\
- Clogged suction lines or filters\n\
- Pump operating too far from BEP\n\
- Excessive suction lift\n\
\n\
Effects:\n\
- Loud knocking or cracking noises\n\
- Vibration and reduced performance\n\
- Pitting damage to impeller and casing\n\
- Seal and bearing failure\n\
- Reduced efficiency\n\
\n\
Prevention:\n\
- Maintain adequate NPSH Available > NPSH Required\n\
- Reduce suction line restrictions\n\
- Operate pump near BEP\n\
- Keep fluid temperature within limits\n\
- Proper suction pipe design\n\
\n\
NPSH (Net Positive Suction Head) Required is provided by manufacturer, NPSH Available is determined by system design.";

const PERFORMANCE: &str = "Performance Calculations for Pumps and Compressors:\n\
\n\
Pump Efficiency:\n\
- Overall Efficiency: η = (Hydraulic Power / Shaft Power) × 100%\n\
- Hydraulic Power: P_hyd = (Q × H × ρ × g) / 1000 [kW]\n\
\x20\x20Where: Q = Flow rate (m³/s), H = Total head (m), ρ = Density (kg/m³), g = 9.81 m/s²\n\
- Shaft Power: P_shaft = (2π × N × T) / 60000 [kW]\n\
\n\
Compressor Efficiency:\n\
- Isothermal Efficiency: Assumes constant temperature compression\n\
- Volumetric Efficiency: η_vol = (Actual Flow / Theoretical Flow) × 100%\n\
- Pressure Ratio: PR = P_discharge / P_suction\n\
\n\
Characteristic Curves:\n\
- Show relationship between flow, head, power, and efficiency\n\
- Help in proper pump selection and operation\n\
- Identify BEP (Best Efficiency Point)\n\
\n\
Typical pump efficiencies: 50-85%, compressors: 60-80%";
