//! Radiology reference cards.
//!
//! Each card is a single-resolution summary of one imaging topic: how the
//! study is done, what normal looks like, and what to look for.

use crate::domain::{RadiologyCategory, RadiologyEntry};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    category: RadiologyCategory,
    description: &str,
    technique: &str,
    normal_appearance: &str,
    abnormal_findings: &[&str],
    differential_diagnosis: &[&str],
    clinical_correlation: &str,
    key_pearls: &[&str],
    references: &[&str],
) -> RadiologyEntry {
    RadiologyEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        technique: technique.to_string(),
        normal_appearance: normal_appearance.to_string(),
        abnormal_findings: owned(abnormal_findings),
        differential_diagnosis: owned(differential_diagnosis),
        clinical_correlation: clinical_correlation.to_string(),
        key_pearls: owned(key_pearls),
        references: owned(references),
    }
}

/// The builtin radiology database, in presentation order
pub fn builtin_radiology() -> Vec<RadiologyEntry> {
    vec![
        entry(
            "cxr-systematic-approach",
            "CXR Systematic Approach",
            RadiologyCategory::ChestXray,
            "Structured method for interpreting chest radiographs to avoid missed findings.",
            "PA and lateral views preferred. AP portable acceptable in acute settings. Adequate inspiration = 8-10 posterior ribs visible. Check rotation by comparing clavicular head distance to spinous processes.",
            "Clear lung fields bilaterally. Normal cardiac silhouette (CTR <0.5 on PA). Sharp costophrenic angles. Normal mediastinal contour. Intact bony structures. Trachea midline.",
            &[
                "Opacities (consolidation, mass, atelectasis)",
                "Increased lucency (pneumothorax, emphysema)",
                "Pleural abnormalities (effusion, thickening)",
                "Mediastinal widening or shift",
                "Cardiac enlargement",
                "Abnormal lines and tubes",
            ],
            &[
                "Use ABCDE mnemonic: Airway, Bones, Cardiac, Diaphragm, Everything else",
                "Opacity differential depends on location, shape, and air bronchograms",
            ],
            "The CXR remains the most frequently ordered radiologic study. A systematic approach reduces missed findings from 30% to under 5%. Always compare with prior films when available.",
            &[
                "ABCDE approach: Airway, Bones, Cardiac, Diaphragm, Everything else (lungs, soft tissue)",
                "Always check review areas: apices, costophrenic angles, retrocardiac space, below diaphragm",
                "Lateral view adds ~15% diagnostic yield over PA alone",
                "AP films magnify cardiac silhouette - do not use CTR for cardiomegaly assessment",
            ],
            &[
                "Felson B. Chest Roentgenology. WB Saunders.",
                "ACR Appropriateness Criteria - Chest Imaging.",
            ],
        ),
        entry(
            "cxr-pneumonia",
            "CXR: Pneumonia",
            RadiologyCategory::ChestXray,
            "Radiographic findings in pulmonary infections including lobar, bronchopneumonia, and interstitial patterns.",
            "PA and lateral views. Upright positioning preferred. AP portable if patient cannot stand.",
            "Clear lung parenchyma without consolidation. Normal bronchovascular markings.",
            &[
                "Lobar consolidation with air bronchograms",
                "Patchy airspace opacities (bronchopneumonia)",
                "Interstitial reticular or reticulonodular pattern (atypical/viral)",
                "Pleural effusion (parapneumonic)",
                "Cavitation (abscess, TB, Klebsiella)",
                "Hilar lymphadenopathy",
            ],
            &[
                "Pulmonary edema",
                "Pulmonary hemorrhage",
                "Atelectasis",
                "Lung cancer (post-obstructive pneumonia)",
                "Organizing pneumonia (COP)",
                "Eosinophilic pneumonia",
            ],
            "CXR sensitivity for pneumonia is ~75%. Early or mild infections may be radiographically occult. CT is more sensitive. Round pneumonia is more common in children and may mimic a mass.",
            &[
                "Air bronchograms indicate airspace (alveolar) disease",
                "Silhouette sign localizes pathology: loss of right heart border = RML; loss of left heart border = lingula",
                "Round pneumonia in children mimics a mass - follow-up after antibiotics",
                "Cavitation with air-fluid level suggests abscess",
                "Immunocompromised patients may have atypical presentations",
            ],
            &[
                "Franquet T. Imaging of Pulmonary Infection. Radiology. 2018.",
                "IDSA/ATS Guidelines for Community-Acquired Pneumonia.",
            ],
        ),
        entry(
            "cxr-pneumothorax",
            "CXR: Pneumothorax",
            RadiologyCategory::ChestXray,
            "Identification of air in the pleural space on chest radiography.",
            "Upright PA preferred. Expiratory films may improve detection of small PTX. Supine AP in trauma (look for deep sulcus sign).",
            "Lung markings extend to periphery. No visible visceral pleural line.",
            &[
                "Visible visceral pleural line with absent lung markings peripherally",
                "Deep sulcus sign on supine films",
                "Mediastinal shift away from affected side (tension PTX)",
                "Flattened ipsilateral hemidiaphragm (tension)",
                "Subcutaneous emphysema",
            ],
            &[
                "Skin fold artifact (lines extend beyond chest wall)",
                "Large bulla (curvilinear margin but convex toward mediastinum)",
                "Pneumomediastinum",
                "Artifact from clothing or tubing",
            ],
            "Tension pneumothorax is a clinical diagnosis requiring immediate needle decompression before imaging. On supine film, pneumothorax collects anteriorly and may only manifest as deep sulcus sign or increased lucency at the base.",
            &[
                "Skin folds vs. PTX: skin fold lines extend beyond lung margin and lack sharp visceral pleural line",
                "Deep sulcus sign: abnormally deep costophrenic angle on supine film = anterior pneumothorax",
                "Tension PTX: mediastinal shift, flattened diaphragm, hemodynamic compromise",
                "CT is far more sensitive than CXR for small pneumothorax",
                "Expiratory films rarely add diagnostic value over standard inspiratory PA",
            ],
            &[
                "MacDuff A et al. BTS Pleural Disease Guideline. Thorax. 2010.",
                "ACR Appropriateness Criteria - Pneumothorax.",
            ],
        ),
        entry(
            "cxr-pleural-effusion",
            "CXR: Pleural Effusion",
            RadiologyCategory::ChestXray,
            "Detection and characterization of fluid in the pleural space on chest radiography.",
            "Upright PA and lateral views. Lateral decubitus films confirm free-flowing fluid (layers dependently). At least 200 mL needed for blunting on PA upright; 50 mL on lateral.",
            "Sharp costophrenic angles bilaterally. Clear lateral costophrenic angles on lateral view.",
            &[
                "Blunting of costophrenic angle (meniscus sign)",
                "Opacification of hemithorax in large effusions",
                "Fluid tracking up lateral chest wall",
                "Subpulmonic effusion (elevated hemidiaphragm appearance)",
                "Loculated fluid (D-shaped or lenticular opacity)",
                "Lamellar effusion (thin fluid layer along chest wall)",
            ],
            &[
                "Pleural thickening (does not shift on decubitus)",
                "Atelectasis (volume loss, shift toward opacity)",
                "Consolidation (air bronchograms present)",
                "Elevated hemidiaphragm",
                "Subpulmonic effusion mimicking elevated diaphragm",
            ],
            "Transudative vs. exudative effusion cannot be distinguished radiographically - thoracentesis with Light criteria is needed. Massive unilateral effusion with contralateral mediastinal shift raises concern for malignancy.",
            &[
                "Lateral view detects effusions as small as 50 mL (posterior costophrenic angle)",
                "PA upright requires ~200 mL to blunt costophrenic angle",
                "Subpulmonic effusion: suspect when hemidiaphragm peak is lateral to expected position",
                "Loculated effusion does not layer on decubitus - consider empyema or hemothorax",
                "White-out hemithorax: effusion shifts mediastinum away; atelectasis shifts toward",
            ],
            &[
                "Light RW. Pleural Diseases. Lippincott Williams & Wilkins.",
                "ACR Appropriateness Criteria - Pleural Effusion.",
            ],
        ),
        entry(
            "abd-bowel-obstruction",
            "Abdominal Film: Bowel Obstruction",
            RadiologyCategory::AbdominalXray,
            "Radiographic evaluation of small and large bowel obstruction on abdominal plain films.",
            "Supine and upright abdominal films. Left lateral decubitus if patient cannot stand (to detect free air). Three-view acute abdomen series: supine abdomen, upright abdomen, upright chest.",
            "Small bowel <3 cm, large bowel <6 cm, cecum <9 cm in diameter. Normal gas pattern with small amount of gas in stomach and colon. No dilated loops.",
            &[
                "Dilated small bowel loops (>3 cm) with air-fluid levels",
                "Differential air-fluid levels in same loop (upright)",
                "String-of-pearls sign (small trapped air bubbles)",
                "Transition point with decompressed distal bowel",
                "Dilated colon (>6 cm, cecum >9 cm)",
                "Coffee bean sign (sigmoid volvulus)",
                "Absence of rectal gas in complete obstruction",
            ],
            &[
                "Ileus (generalized dilation without transition point)",
                "Pseudo-obstruction (Ogilvie syndrome)",
                "Sentinel loop (localized ileus near inflammation)",
                "SBO: adhesions (most common), hernia, neoplasm, Crohn disease",
                "LBO: colorectal cancer, volvulus, diverticulitis",
            ],
            "Plain films have ~60% sensitivity for SBO. CT is superior for detecting transition point, etiology, and complications (strangulation, closed-loop). Rule of 3-6-9: SB >3 cm, LB >6 cm, cecum >9 cm. Cecal diameter >12 cm = impending perforation risk.",
            &[
                "Rule of 3-6-9: SB >3 cm, LB >6 cm, cecum >9 cm = abnormal",
                "SBO: dilated proximal loops, decompressed distal bowel, air-fluid levels",
                "Valvulae conniventes (small bowel) cross entire lumen; haustra (colon) are incomplete",
                "Coffee bean sign = sigmoid volvulus; cecal volvulus shows kidney-shaped gas in LUQ",
                "CT is gold standard for detecting transition point and strangulation",
            ],
            &[
                "Thompson WM et al. AJR. Imaging of bowel obstruction.",
                "ACR Appropriateness Criteria - Suspected SBO.",
            ],
        ),
        entry(
            "abd-free-air",
            "Abdominal Film: Pneumoperitoneum",
            RadiologyCategory::AbdominalXray,
            "Detection of free intraperitoneal air on plain radiographs indicating bowel perforation.",
            "Upright CXR is most sensitive plain film for detecting free air (as little as 1-2 mL under diaphragm). Left lateral decubitus shows air over liver. Supine films are least sensitive.",
            "No air visible beneath the diaphragm on upright films. Normal bowel gas pattern. No Rigler sign.",
            &[
                "Free air under diaphragm on upright CXR",
                "Rigler sign (double-wall sign: air on both sides of bowel wall on supine)",
                "Football sign (large oval lucency in supine, especially neonates)",
                "Falciform ligament sign (outlined by free air)",
                "Triangular air collections between bowel loops",
                "Air outlining liver edge on left lateral decubitus",
            ],
            &[
                "Chilaiditi sign (interposed colon between liver and diaphragm)",
                "Subdiaphragmatic fat pad",
                "Curvilinear atelectasis",
                "Post-surgical (normal up to 7 days post-laparotomy)",
                "Post-endoscopy or peritoneal dialysis",
            ],
            "Free air in a non-post-surgical patient requires urgent surgical consultation for presumed bowel perforation. CT is far more sensitive than plain film and can detect tiny amounts of free air. Causes include perforated peptic ulcer, diverticulitis, trauma, and iatrogenic.",
            &[
                "Upright CXR is more sensitive than upright abdominal film for free air",
                "Patient should be upright for 10 minutes before film to allow air to rise",
                "Rigler sign (double-wall): both sides of bowel wall visible = large pneumoperitoneum",
                "Football sign: large midline lucency on supine film (especially neonates)",
                "Post-op free air can persist up to 7 days; persistent or increasing air is concerning",
            ],
            &[
                "Defined by Rigler LG. AJR. 1941.",
                "Defined by Miller RE, Nelson SW. AJR. 1971.",
            ],
        ),
        entry(
            "ct-head-hemorrhage",
            "CT Head: Intracranial Hemorrhage",
            RadiologyCategory::CtInterpretation,
            "Non-contrast head CT for detection and characterization of intracranial hemorrhage.",
            "Non-contrast CT head. Acute blood appears hyperdense (50-70 HU). CTA may follow to identify source (aneurysm, AVM).",
            "No hyperdense collections. Normal sulci and cisterns. Normal ventricles without blood layering.",
            &[
                "Epidural hematoma: biconvex/lenticular, does not cross sutures",
                "Subdural hematoma: crescent-shaped, crosses sutures",
                "Subarachnoid hemorrhage: hyperdense blood in sulci and cisterns",
                "Intraparenchymal hemorrhage: hyperdense mass within brain",
                "Intraventricular hemorrhage: blood layering in ventricles",
                "Midline shift, herniation, hydrocephalus",
            ],
            &[
                "Epidural: middle meningeal artery (temporal bone fracture)",
                "Subdural: bridging vein tear (trauma, anticoagulation, elderly)",
                "SAH: ruptured aneurysm (85%), AVM, trauma",
                "IPH: hypertension (basal ganglia, thalamus, pons, cerebellum), amyloid angiopathy (lobar)",
                "Hemorrhagic transformation of ischemic stroke",
            ],
            "Acute blood is hyperdense on CT. Subacute blood (1-3 weeks) becomes isodense, then hypodense (chronic). Epidural hematoma = \"talk and die\" lucid interval. SAH with negative CT requires lumbar puncture (sensitivity of CT drops after 6 hours).",
            &[
                "Blood density on CT evolves: acute (bright) -> subacute (iso) -> chronic (dark)",
                "Epidural: lenticular, does not cross sutures, often temporal (MMA)",
                "Subdural: crescent, crosses sutures, follows brain surface",
                "SAH: blood in cisterns/sulci - check suprasellar, Sylvian, interhemispheric cisterns",
                "CT sensitivity for SAH: ~98% in first 6 hours, drops to ~50% at 1 week",
            ],
            &[
                "Defined by Connolly ES et al. AHA/ASA SAH Guidelines. Stroke. 2012.",
                "Defined by Hemphill JC et al. ICH Score. Stroke. 2001.",
            ],
        ),
        entry(
            "ct-pe-protocol",
            "CT Pulmonary Angiography (CTPA)",
            RadiologyCategory::CtInterpretation,
            "CT pulmonary angiography for diagnosis of pulmonary embolism.",
            "IV contrast with bolus tracking at pulmonary artery. Thin slices (0.625-1.25 mm). ECG gating optional. Patient coached to hold breath. Scan craniocaudal direction.",
            "Homogeneous opacification of pulmonary arteries. No intraluminal filling defects. Normal RV/LV ratio (<1:1). No pleural effusion.",
            &[
                "Intraluminal filling defect (acute PE = central/occlusive)",
                "Saddle embolus (straddles bifurcation)",
                "RV enlargement (RV/LV >1:1 = RV strain)",
                "Septal bowing toward LV",
                "Reflux of contrast into IVC/hepatic veins",
                "Peripheral wedge-shaped infarct (Hampton hump)",
                "Mosaic attenuation (chronic PE)",
                "Eccentric mural thrombus (chronic PE)",
            ],
            &[
                "Flow artifact vs. true filling defect",
                "Mucus plugging (pulmonary arteries vs. bronchi)",
                "Pulmonary artery sarcoma (rare)",
                "In situ thrombosis (vasculitis)",
                "Lymph node compression",
            ],
            "CTPA sensitivity >95% and specificity >97% for PE. RV strain on CTPA predicts adverse outcomes even if hemodynamically stable (submassive PE). Wells score or PERC rule should guide ordering. D-dimer used to exclude PE in low-probability patients.",
            &[
                "Acute PE: central filling defect with surrounding contrast (polo mint sign on axial)",
                "Chronic PE: eccentric mural thrombus, calcification, web/band, mosaic attenuation",
                "RV/LV ratio >1 on CT = RV strain, consider thrombolysis in massive PE",
                "Saddle PE does not automatically mean massive - assess hemodynamics",
                "Poor bolus opacification can create false-positive filling defects - check for adequate contrast",
            ],
            &[
                "PIOPED II Study. NEJM. 2006.",
                "ESC Guidelines for PE Management. 2019.",
            ],
        ),
        entry(
            "ct-abdomen-appendicitis",
            "CT Abdomen: Appendicitis",
            RadiologyCategory::CtInterpretation,
            "CT findings in acute appendicitis, the most common surgical emergency.",
            "CT abdomen/pelvis with IV contrast is standard. Oral contrast no longer routinely required. Thin slices (3-5 mm) through pelvis.",
            "Normal appendix <6 mm diameter, thin-walled, no periappendiceal fat stranding.",
            &[
                "Dilated appendix >6 mm with wall enhancement",
                "Appendicolith (25-30% of cases)",
                "Periappendiceal fat stranding",
                "Periappendiceal fluid or abscess",
                "Appendiceal wall thickening and enhancement",
                "Focal cecal wall thickening (cecal bar sign)",
                "Arrowhead sign (contrast/air funneling toward appendix)",
            ],
            &[
                "Mesenteric lymphadenitis",
                "Right-sided diverticulitis",
                "Crohn disease (terminal ileitis)",
                "Tubo-ovarian abscess / PID",
                "Epiploic appendagitis",
                "Omental infarction",
                "Meckel diverticulitis",
            ],
            "CT sensitivity is 94-98% for appendicitis. Perforation is suggested by extraluminal air, abscess, or phlegmon. In children and pregnant patients, ultrasound is first-line (graded compression technique). MRI is an alternative in pregnancy.",
            &[
                "Appendix >6 mm with periappendiceal fat stranding is highly suggestive",
                "Appendicolith present in 25-30% of cases; highly specific when present with symptoms",
                "Perforation: look for extraluminal air, abscess, loss of appendiceal wall integrity",
                "Ultrasound first in children and pregnancy; MRI as alternative",
                "Normal appendix on CT effectively rules out appendicitis (NPV ~98%)",
            ],
            &[
                "Defined by Rao PM et al. NEJM. 1998.",
                "ACR Appropriateness Criteria - RLQ Pain.",
            ],
        ),
        entry(
            "ct-renal-colic",
            "CT: Renal Colic / Urolithiasis",
            RadiologyCategory::CtInterpretation,
            "Non-contrast CT for evaluation of kidney stones and ureteral obstruction.",
            "Non-contrast CT abdomen/pelvis (stone protocol). Low-dose CT has similar sensitivity. No oral or IV contrast needed. Thin slices for small stone detection.",
            "No calcific densities in collecting system or ureters. Normal renal size and parenchyma. No hydronephrosis.",
            &[
                "Calcific density in ureter (stone)",
                "Hydronephrosis / hydroureter proximal to stone",
                "Perinephric stranding (edema)",
                "Tissue rim sign (rim of soft tissue around ureteral stone)",
                "Ureteral wall thickening at stone level",
                "Forniceal rupture (perinephric fluid from high-grade obstruction)",
            ],
            &[
                "Ureteral stone vs. phlebolith: tissue rim sign (stone), comet tail sign (phlebolith)",
                "Uric acid stones: radiolucent on X-ray but visible on CT",
                "Appendicolith in appendix vs. ureteral stone",
                "Calcified mesenteric lymph node",
            ],
            "CT without contrast is >95% sensitive for urolithiasis. Stone composition cannot be determined by CT but density helps (uric acid: 200-600 HU; calcium: 800-1200+ HU). Stones >5 mm less likely to pass spontaneously. Emergent urology consultation for infected obstructed stone (pyonephrosis).",
            &[
                "Non-contrast CT is gold standard for renal colic (>95% sensitive)",
                "Tissue rim sign distinguishes ureteral stone from phlebolith",
                "Stone size predicts passage: <5 mm = ~90% pass; >7 mm = <50% pass",
                "Low-dose CT protocol adequate for stone detection (reduced radiation)",
                "Infected obstructed kidney = urologic emergency (sepsis risk)",
            ],
            &[
                "AUA/Endourology Society Guideline on Kidney Stones. 2014.",
                "ACR Appropriateness Criteria - Acute Flank Pain.",
            ],
        ),
        entry(
            "mri-brain",
            "MRI Brain: Interpretation Approach",
            RadiologyCategory::MriInterpretation,
            "Systematic approach to brain MRI interpretation including key sequences and common pathology.",
            "Standard brain MRI: T1, T2, FLAIR, DWI/ADC, T1 post-contrast (if indicated). SWI/GRE for hemorrhage. MRA if vascular pathology suspected.",
            "Normal gray-white matter differentiation on all sequences. No restricted diffusion. No abnormal enhancement. Normal ventricular size and sulcal pattern for age.",
            &[
                "Restricted diffusion (bright DWI, dark ADC) = acute infarct, abscess core, tumor",
                "FLAIR hyperintensity = edema, gliosis, demyelination, tumor",
                "Abnormal enhancement = BBB breakdown (tumor, infection, inflammation)",
                "Mass effect, midline shift, herniation",
                "Blooming on GRE/SWI = hemorrhage, calcification",
                "T1 bright signal = fat, blood products (methemoglobin), melanin, protein",
            ],
            &[
                "White matter lesions: MS, small vessel disease, vasculitis, ADEM",
                "Ring-enhancing lesion: abscess, high-grade glioma, metastasis, lymphoma, toxoplasmosis",
                "Restricted diffusion: acute stroke, abscess, epidermoid, highly cellular tumor",
                "T1 hyperintense: subacute blood, fat, melanoma metastasis",
            ],
            "DWI is the most sensitive sequence for acute stroke (within minutes). FLAIR is most sensitive for white matter pathology and subarachnoid disease. Post-contrast imaging essential for tumor and infection evaluation. Always compare with prior studies.",
            &[
                "DWI bright + ADC dark = true restricted diffusion (stroke, abscess, hypercellular tumor)",
                "DWI bright + ADC bright = T2 shine-through (not true restriction)",
                "Ring-enhancing lesion DDx: abscess (DWI bright center), tumor (DWI variable)",
                "MS plaques: periventricular, juxtacortical, infratentorial, spinal cord (Dawson fingers)",
                "FLAIR is better than T2 for periventricular and cortical lesions (CSF suppression)",
            ],
            &[
                "Defined by Osborn AG. Diagnostic Imaging: Brain. Elsevier.",
                "McDonald Criteria for MS Diagnosis. 2017 revision.",
            ],
        ),
        entry(
            "mri-knee",
            "MRI Knee: Interpretation",
            RadiologyCategory::MriInterpretation,
            "MRI evaluation of the knee for meniscal tears, ligament injuries, and cartilage pathology.",
            "Standard knee MRI: sagittal PD/T2 fat-sat, coronal PD/T2 fat-sat, axial PD fat-sat. T1 for anatomy. 3T preferred for resolution.",
            "Menisci: uniform low signal triangles (bow-tie bodies, 2 body slices). ACL: continuous low-signal band. PCL: uniform dark band. Cartilage: smooth, uniform signal and thickness.",
            &[
                "Meniscal tear: high signal extending to articular surface on 2+ images",
                "ACL tear: discontinuity, abnormal angle, edema in intercondylar notch",
                "PCL tear: thickened, discontinuous, or abnormal signal",
                "MCL/LCL injury: thickening, edema, discontinuity",
                "Bone marrow edema pattern: indicates bone bruise or occult fracture",
                "Cartilage defect: thinning, fissuring, full-thickness loss",
                "Joint effusion, Baker cyst",
            ],
            &[
                "Meniscal tear vs. normal meniscal vascularity (grade 1-2 signal does not reach surface)",
                "ACL tear: bone bruise pattern (lateral femoral condyle + posterolateral tibial plateau = pivot shift)",
                "MCL tear grade: I (sprain), II (partial), III (complete disruption)",
                "Parameniscal cyst (suggests underlying meniscal tear)",
            ],
            "MRI sensitivity for meniscal tears is 90-95%. ACL tears are frequently associated with lateral bone bruises (pivot-shift mechanism). O'Donoghue unhappy triad: ACL + MCL + medial meniscus (or lateral meniscus). Cartilage grading uses modified Outerbridge classification.",
            &[
                "Meniscal tear requires high signal reaching articular surface on 2+ consecutive images",
                "Bucket-handle tear: absent bow tie on >2 sagittal slices, double PCL sign",
                "ACL tear: empty notch sign, anterior tibial translation, bone bruise pattern",
                "Pivot-shift bone bruise: lateral femoral condyle + posterolateral tibia = ACL tear mechanism",
                "Magic angle artifact can mimic pathology at 55 degrees to B0 (especially posterior horn meniscus)",
            ],
            &[
                "Defined by Stoller DW. Magnetic Resonance Imaging in Orthopaedics and Sports Medicine.",
                "Defined by Outerbridge RE. J Bone Joint Surg. Cartilage classification. 1961.",
            ],
        ),
        entry(
            "us-fast-exam",
            "Ultrasound: FAST Exam",
            RadiologyCategory::Ultrasound,
            "Focused Assessment with Sonography for Trauma - rapid bedside assessment for free fluid in trauma.",
            "Curvilinear (3.5-5 MHz) or phased array probe. Four standard views: subxiphoid (cardiac), RUQ (Morrison pouch), LUQ (splenorenal), suprapubic (pelvis). eFAST adds bilateral anterior chest for pneumothorax.",
            "No free fluid in pericardial space, Morrison pouch (hepatorenal recess), splenorenal recess, or pelvis. Lung sliding present bilaterally on eFAST.",
            &[
                "Anechoic stripe in Morrison pouch (RUQ free fluid)",
                "Perisplenic or splenorenal fluid",
                "Pericardial effusion (anechoic rim around heart)",
                "Pelvic free fluid (posterior to bladder)",
                "Absent lung sliding (pneumothorax on eFAST)",
                "Lung point (transition between sliding and non-sliding)",
            ],
            &[
                "Physiologic pelvic fluid in women (small amount)",
                "Pre-existing ascites",
                "Pericardial fat pad vs. effusion",
                "Pleural effusion (above diaphragm) vs. peritoneal fluid (below diaphragm)",
                "Mirror artifact mimicking free fluid",
            ],
            "FAST sensitivity is 73-88% for free fluid (dependent on volume; >200 mL more reliably detected). Negative FAST does not exclude solid organ injury - CT is definitive. Positive FAST in hemodynamically unstable patient = OR for exploratory laparotomy. Serial FAST exams improve sensitivity.",
            &[
                "Positive FAST + unstable vitals = OR (no CT needed)",
                "Negative FAST does not rule out injury - CT for stable patients with mechanism",
                "RUQ (Morrison pouch) is the most sensitive single view for free fluid",
                "Minimum detectable fluid on FAST is approximately 200-500 mL",
                "eFAST adds bilateral anterior chest views for pneumothorax (absent lung sliding)",
            ],
            &[
                "Defined by Rozycki GS et al. J Trauma. 1995.",
                "ATLS 10th Edition - FAST Protocol.",
            ],
        ),
        entry(
            "us-ruq",
            "Ultrasound: Right Upper Quadrant",
            RadiologyCategory::Ultrasound,
            "RUQ ultrasound for evaluation of gallbladder disease, biliary pathology, and hepatic assessment.",
            "Curvilinear probe (3.5-5 MHz). Patient fasting 4-6 hours for gallbladder distension. Subcostal and intercostal approaches. Left lateral decubitus positioning may improve visualization.",
            "Thin-walled gallbladder (<3 mm) with anechoic bile. Common bile duct <6 mm (<8 mm post-cholecystectomy, <10 mm if age >60). Homogeneous liver parenchyma.",
            &[
                "Gallstones: echogenic foci with posterior acoustic shadowing, mobile",
                "Sonographic Murphy sign (focal tenderness under probe at GB)",
                "GB wall thickening >3 mm (cholecystitis)",
                "Pericholecystic fluid",
                "CBD dilation >6 mm",
                "Intrahepatic biliary dilation (parallel channel sign)",
                "Hepatic steatosis (increased echogenicity)",
                "Focal liver lesions",
            ],
            &[
                "Gallstone vs. polyp: stones are mobile with shadowing; polyps are fixed, no shadow",
                "Sludge vs. stones: sludge is low-level echoes without discrete shadowing",
                "GB wall thickening: cholecystitis, hepatitis, CHF, hypoalbuminemia, ascites",
                "CBD dilation: choledocholithiasis, stricture, ampullary tumor, pancreatic head mass",
            ],
            "RUQ ultrasound is the first-line study for suspected biliary colic and cholecystitis. Sonographic Murphy sign has 92% PPV for acute cholecystitis. CBD dilation without visible stone warrants MRCP or EUS. HIDA scan if ultrasound equivocal for cholecystitis.",
            &[
                "Classic cholecystitis triad: gallstones + GB wall thickening + sonographic Murphy sign",
                "CBD normal <6 mm (add 1 mm per decade >60; up to 10 mm post-cholecystectomy)",
                "Wall-echo-shadow (WES) sign: contracted GB packed with stones",
                "Porcelain gallbladder: hyperechoic GB wall with shadowing (malignancy risk)",
                "Hepatic steatosis: liver brighter than kidney cortex",
            ],
            &[
                "ACR Appropriateness Criteria - RUQ Pain.",
                "ACR-SPR-SRU Practice Parameter for US of the Abdomen.",
            ],
        ),
        entry(
            "us-thyroid",
            "Ultrasound: Thyroid Nodule Evaluation",
            RadiologyCategory::Ultrasound,
            "Ultrasound characterization and risk stratification of thyroid nodules using ACR TI-RADS.",
            "High-frequency linear probe (10-15 MHz). Evaluate composition, echogenicity, shape, margins, and echogenic foci. Apply ACR TI-RADS scoring system.",
            "Homogeneous thyroid parenchyma. No discrete nodules. Normal isthmus thickness (<3 mm).",
            &[
                "Solid hypoechoic nodule (more suspicious)",
                "Taller-than-wide shape (suspicious)",
                "Irregular margins or extrathyroidal extension",
                "Punctate echogenic foci (microcalcifications - suspicious)",
                "Macrocalcification (coarse calcification)",
                "Suspicious cervical lymphadenopathy (round, loss of fatty hilum, calcifications)",
            ],
            &[
                "Benign: colloid cyst, adenomatoid nodule, thyroiditis",
                "Malignant: papillary carcinoma (most common), follicular, medullary, anaplastic",
                "Indeterminate: follicular neoplasm (cannot distinguish adenoma from carcinoma on US)",
            ],
            "ACR TI-RADS assigns points based on 5 US features to categorize nodules as TR1-TR5 and guide FNA thresholds by size. Papillary carcinoma: hypoechoic, solid, microcalcifications, taller-than-wide. Most thyroid nodules are benign (>90%). FNA is the gold standard for cytologic diagnosis.",
            &[
                "ACR TI-RADS: score based on composition, echogenicity, shape, margin, echogenic foci",
                "TR1 (benign): no FNA; TR5 (highly suspicious): FNA if >=1 cm",
                "Microcalcifications (punctate echogenic foci) = psammoma bodies = papillary cancer association",
                "Taller-than-wide shape has high specificity for malignancy",
                "Purely cystic nodules and spongiform nodules are almost always benign",
            ],
            &[
                "ACR TI-RADS. Tessler FN et al. JACR. 2017.",
                "ATA Thyroid Nodule Management Guidelines. 2015.",
            ],
        ),
        entry(
            "contrast-iodinated",
            "Iodinated Contrast: Considerations",
            RadiologyCategory::ContrastStudies,
            "Safety considerations, contraindications, and management of iodinated contrast media used in CT and fluoroscopy.",
            "IV injection via power injector. Typical dose 1-2 mL/kg. Flow rates 2-5 mL/s depending on study. Bolus tracking or test bolus for optimal timing.",
            "Homogeneous organ and vascular enhancement. Appropriate timing for study indication.",
            &[
                "Contrast extravasation (active bleeding)",
                "Non-enhancing regions (infarction, necrosis)",
                "Abnormal enhancement patterns (tumor vascularity)",
                "Contrast pooling (false lumen in dissection)",
            ],
            &[
                "Contrast reaction vs. vasovagal episode vs. anxiety",
                "Contrast-induced nephropathy vs. other causes of AKI",
                "Allergic-like reaction vs. chemotoxic reaction",
            ],
            "Iodinated contrast reaction risk is 0.2-0.7% (mild) and 0.02-0.04% (severe). Risk factors: prior reaction (5x risk), asthma, multiple allergies. Metformin held 48h after contrast if eGFR <30 (risk of lactic acidosis). eGFR >30 is generally safe for IV contrast (ACR 2023 manual).",
            &[
                "Prior contrast reaction is the strongest risk factor (5x increased risk)",
                "Premedication protocol: prednisone 50 mg at 13h, 7h, 1h before + diphenhydramine 50 mg at 1h",
                "Contrast-induced nephropathy risk is lower than previously thought (ACR updated guidelines)",
                "eGFR >30: IV contrast generally safe; eGFR <30: risk-benefit discussion",
                "Metformin: hold 48h post-contrast only if eGFR <30 (prevent lactic acidosis)",
                "Thyroid storm risk with iodinated contrast in uncontrolled hyperthyroidism",
            ],
            &[
                "ACR Manual on Contrast Media. 2023 Edition.",
                "ACR-NKF Consensus Statement on Contrast. 2020.",
            ],
        ),
        entry(
            "contrast-gadolinium",
            "Gadolinium Contrast: MRI Considerations",
            RadiologyCategory::ContrastStudies,
            "Safety, indications, and risks of gadolinium-based contrast agents for MRI.",
            "IV injection at 0.1 mmol/kg (standard dose). Typical injection rate 2 mL/s. Imaging timing varies by protocol (dynamic liver: 20-30s arterial, 70s portal venous, 3-5 min delayed).",
            "Enhancement of normal vascular structures. Uniform organ enhancement in appropriate phases.",
            &[
                "Enhancement of mass lesions (BBB breakdown)",
                "Ring enhancement (abscess, high-grade tumor)",
                "Leptomeningeal enhancement (meningitis, carcinomatosis)",
                "Abnormal organ enhancement patterns",
            ],
            &[
                "NSF vs. systemic sclerosis vs. eosinophilic fasciitis",
                "Gadolinium deposition disease (controversial entity)",
                "Enhancement from inflammation vs. neoplasm",
            ],
            "Gadolinium-based contrast agents are classified into Group I (higher NSF risk, linear chelates) and Group II (lower risk, macrocyclic chelates). NSF occurs almost exclusively with eGFR <30 and Group I agents. Gadolinium deposition in brain and bone occurs with all agents but clinical significance is uncertain.",
            &[
                "Group II (macrocyclic: Dotarem, Gadavist, ProHance) preferred - lowest NSF risk",
                "NSF risk essentially eliminated with Group II agents even in dialysis patients",
                "Gadolinium deposition in brain (dentate nucleus, globus pallidus) - clinical significance unknown",
                "Avoid gadolinium in pregnancy unless benefit clearly outweighs risk",
                "No need to hold metformin (unlike iodinated contrast)",
                "Allergic-like reactions much rarer than with iodinated contrast (~0.01-0.1%)",
            ],
            &[
                "ACR Manual on Contrast Media - Gadolinium Section. 2023.",
                "FDA Drug Safety Communication on Gadolinium Retention. 2017.",
            ],
        ),
        entry(
            "radsafety-alara",
            "Radiation Safety: ALARA Principle",
            RadiologyCategory::RadiationSafety,
            "As Low As Reasonably Achievable - the fundamental principle of radiation protection in medical imaging.",
            "Apply three pillars of radiation protection: time (minimize exposure duration), distance (inverse square law), shielding (appropriate barriers). Justification of every study and optimization of technique.",
            "N/A - safety principle, not an imaging finding.",
            &[
                "Excessive radiation dose alerts in dose monitoring systems",
                "Repeat examinations without clinical indication",
                "Failure to use pediatric protocols in children",
                "Missing documentation of pregnancy screening",
            ],
            &[
                "Deterministic effects (dose-threshold): skin erythema >2 Gy, cataract >0.5 Gy",
                "Stochastic effects (no threshold): cancer, genetic effects - probability increases with dose",
            ],
            "Annual background radiation is ~3 mSv. Medical imaging adds ~3 mSv average per person in the US. Linear no-threshold model estimates ~5 excess fatal cancers per 100,000 persons per 10 mSv. Benefits of appropriate imaging far outweigh risks, but unnecessary studies should be avoided.",
            &[
                "ALARA: As Low As Reasonably Achievable - applies to all ionizing radiation imaging",
                "Three pillars: Time, Distance, Shielding",
                "Justification (right study), optimization (right technique), dose limitation (occupational limits)",
                "Occupational annual limit: 50 mSv/year, 100 mSv over 5 years",
                "Pregnant worker limit: 5 mSv total to fetus over gestation",
                "Image Gently (pediatric) and Image Wisely (adult) campaigns",
            ],
            &[
                "ICRP Publication 103. Recommendations of the ICRP. 2007.",
                "ACR Appropriateness Criteria - Radiation Dose.",
            ],
        ),
        entry(
            "radsafety-pregnancy",
            "Radiation Safety: Imaging in Pregnancy",
            RadiologyCategory::RadiationSafety,
            "Guidelines for diagnostic imaging during pregnancy, balancing fetal radiation risk against diagnostic benefit.",
            "Ultrasound and MRI (without gadolinium) are preferred modalities. X-ray and CT used when clinically necessary with appropriate fetal dose estimation. Shield when possible.",
            "N/A - safety guideline, not imaging finding.",
            &[
                "Fetal dose thresholds: <50 mGy generally safe",
                "Deterministic effects (microcephaly, intellectual disability) unlikely below 100-200 mGy",
                "No single diagnostic study reaches 50 mGy fetal dose",
                "Iodinated contrast crosses placenta - use only when essential",
            ],
            &[
                "Fetal dose by study: CXR <0.01 mGy, head/chest CT <1 mGy, abdomen/pelvis CT 10-50 mGy",
                "Risk period: organogenesis (2-8 weeks) most sensitive to teratogenesis",
                "Stochastic risk: estimated additional lifetime cancer risk ~0.1% per 10 mGy",
            ],
            "No single diagnostic study delivers enough radiation to justify termination of pregnancy. ACR states: \"The risk of not making the diagnosis is usually far greater than the small risk from radiation exposure.\" Always document informed discussion. Use US and MRI first when possible.",
            &[
                "No single diagnostic study justifies pregnancy termination (all below teratogenic threshold)",
                "Threshold for deterministic effects: 100-200 mGy (no diagnostic study reaches this)",
                "Preferred modalities: ultrasound first, then MRI (without gadolinium)",
                "CT is acceptable when clinically indicated - fetal dose from most studies is low",
                "Gadolinium crosses placenta and is classified as category C - avoid unless essential",
                "Document informed consent discussion regardless of study type",
            ],
            &[
                "ACR-SPR Practice Parameter for Imaging Pregnant Patients. 2018.",
                "ACOG Committee Opinion 723: Imaging During Pregnancy. 2017.",
            ],
        ),
        entry(
            "ir-biopsy-basics",
            "Interventional Radiology: Image-Guided Biopsy",
            RadiologyCategory::Interventional,
            "Fundamentals of percutaneous image-guided biopsy techniques used across organ systems.",
            "Guidance modalities: US (real-time, no radiation, preferred when lesion visible), CT (deep lesions, lung, retroperitoneum), fluoroscopy (bone), MRI (prostate fusion). Core needle biopsy (18-20G) preferred for tissue architecture. FNA (22-25G) for cytology.",
            "N/A - interventional procedure.",
            &[
                "Target lesion identification and needle trajectory planning",
                "Complications: hemorrhage, pneumothorax (lung biopsy ~20%), infection, tumor seeding (rare)",
                "Non-diagnostic sample (need repeat biopsy)",
            ],
            &[
                "Core biopsy vs. FNA: core provides architecture (preferred for most solid masses)",
                "Imaging guidance choice depends on lesion visibility and accessibility",
                "Coaxial technique for multiple passes through single puncture",
            ],
            "Image-guided biopsy has largely replaced surgical biopsy for most lesions. Pneumothorax rate for lung biopsy is 15-25% (chest tube needed in 5-7%). Bleeding risk increased with coagulopathy - check platelets >50k, INR <1.5. Anticoagulants should be held per SIR consensus guidelines.",
            &[
                "US guidance preferred when lesion visible (real-time, no radiation, portable)",
                "CT guidance for deep lesions, lung nodules, retroperitoneal masses",
                "Core needle (18-20G) preferred for tissue architecture; FNA (22-25G) for cytology",
                "Lung biopsy pneumothorax rate: 15-25%; chest tube needed in ~5-7%",
                "Pre-procedure: check coagulation (platelets >50K, INR <1.5), hold anticoagulants per SIR guidelines",
            ],
            &[
                "SIR Consensus Guidelines for Periprocedural Management. 2019.",
                "ACR-SIR-SPR Practice Parameter for Image-Guided Biopsy.",
            ],
        ),
        entry(
            "ir-embolization",
            "Interventional Radiology: Embolization",
            RadiologyCategory::Interventional,
            "Catheter-based embolization techniques for hemorrhage control, tumor treatment, and vascular malformations.",
            "Femoral or radial arterial access. Selective/superselective catheterization under fluoroscopy. Embolic agents: coils, particles, gelatin sponge, glue, Onyx. Angiographic confirmation of vessel occlusion.",
            "N/A - interventional procedure.",
            &[
                "Active contrast extravasation (bleeding source)",
                "Pseudoaneurysm (contained vascular injury)",
                "AVM nidus and feeding vessels",
                "Tumor blush (hypervascular tumor)",
                "Post-embolization: absent flow to target territory",
            ],
            &[
                "GI bleeding source: upper vs. lower, arterial vs. venous",
                "Post-traumatic hemorrhage: solid organ, pelvic fracture, mesenteric",
                "Uterine fibroid embolization vs. surgical myomectomy",
                "TACE for HCC (transarterial chemoembolization)",
            ],
            "Embolization is first-line for many hemorrhagic emergencies in hemodynamically stable patients. GI bleeding requires active rate >0.5 mL/min for angiographic detection. Pelvic fracture hemorrhage increasingly managed by IR embolization. UAE (uterine artery embolization) is established treatment for symptomatic fibroids.",
            &[
                "Angiographic detection of bleeding requires >0.5 mL/min active hemorrhage",
                "CTA before angiography helps localize bleeding source and plan approach",
                "Coils for vessel occlusion; particles for tumor/diffuse bleeding; gelfoam for temporary hemostasis",
                "TACE: chemoembolization of HCC (embolic particles loaded with chemotherapy)",
                "Post-embolization syndrome: fever, pain, nausea (expected, not a complication)",
            ],
            &[
                "SIR Quality Improvement Guidelines for Embolization.",
                "AASLD Guidelines for HCC - Locoregional Therapy.",
            ],
        ),
        entry(
            "msk-fracture-basics",
            "MSK Imaging: Fracture Identification",
            RadiologyCategory::MusculoskeletalImaging,
            "Systematic approach to identifying fractures on plain radiographs and advanced imaging.",
            "Minimum 2 views at 90 degrees for any suspected fracture. Include joint above and below. CT for complex fractures (intra-articular, spine, pelvis). MRI for occult fractures and stress fractures.",
            "Intact cortical margins. Normal trabecular pattern. Normal joint alignment. No soft tissue swelling.",
            &[
                "Cortical disruption (fracture line)",
                "Lucent line (non-impacted fracture)",
                "Sclerotic line (impacted/healing fracture)",
                "Angulation, displacement, shortening",
                "Joint effusion (lipohemarthrosis = intra-articular fracture)",
                "Soft tissue swelling overlying fracture site",
                "Periosteal reaction (stress fracture, healing)",
            ],
            &[
                "Fracture vs. nutrient foramen (smooth corticated edges, oblique)",
                "Fracture vs. accessory ossicle (smooth, corticated, known locations)",
                "Pathologic fracture: lytic lesion, permeative destruction, soft tissue mass",
                "Stress fracture vs. insufficiency fracture (activity vs. weakened bone)",
            ],
            "X-ray sensitivity for fractures varies by location: high for long bone shaft, lower for scaphoid, hip, and stress fractures. Ottawa ankle/knee/foot rules guide need for X-ray. MRI is the gold standard for occult fractures. Lipohemarthrosis on lateral knee X-ray indicates intra-articular fracture.",
            &[
                "Always obtain minimum 2 views at 90 degrees; 3 views for ankle and wrist",
                "Ottawa rules reduce unnecessary imaging in ankle, knee, and foot injuries",
                "Lipohemarthrosis (fat-fluid level on lateral knee): intra-articular fracture until proven otherwise",
                "Scaphoid fracture may be X-ray occult - MRI if clinical suspicion (snuffbox tenderness)",
                "Describe fractures: open/closed, location, orientation, displacement, angulation, comminution",
            ],
            &[
                "Defined by Stiell IG et al. Ottawa Ankle Rules. JAMA. 1994.",
                "ACR Appropriateness Criteria - Acute Extremity Trauma.",
            ],
        ),
        entry(
            "msk-shoulder",
            "MSK Imaging: Shoulder",
            RadiologyCategory::MusculoskeletalImaging,
            "Imaging evaluation of the shoulder for rotator cuff, labral, and bony pathology.",
            "X-ray: AP (internal/external rotation), axillary lateral, scapular Y (outlet). MRI: standard protocol with PD and T2 fat-sat in 3 planes. MR arthrogram for labral tears (intra-articular gadolinium).",
            "Normal acromiohumeral distance (>7 mm). Intact rotator cuff tendons (supraspinatus, infraspinatus, subscapularis, teres minor). Normal labrum and glenohumeral ligaments.",
            &[
                "Rotator cuff tear: tendon discontinuity, retraction, fatty infiltration",
                "Rotator cuff tendinopathy: thickened, abnormal signal without full-thickness tear",
                "Labral tear: displaced or fragmented labrum (Bankart, SLAP)",
                "Hill-Sachs lesion (posterolateral humeral head impaction fracture)",
                "Bankart lesion (anteroinferior glenoid labral tear)",
                "Acromioclavicular joint arthropathy",
                "Subacromial/subdeltoid bursitis",
            ],
            &[
                "Rotator cuff tear: partial vs. full-thickness, acute vs. chronic",
                "Impingement: subacromial spur, type III acromion, os acromiale",
                "Adhesive capsulitis (frozen shoulder): thickened capsule, axillary recess",
                "Calcific tendinitis: calcium within tendon substance",
            ],
            "Rotator cuff tears are extremely common: up to 50% of asymptomatic people over 60 have tears. Clinical correlation is essential. MRI sensitivity for full-thickness tears is >90%. MR arthrogram improves detection of partial-thickness and labral tears. Ultrasound is an excellent alternative for rotator cuff evaluation in experienced hands.",
            &[
                "Supraspinatus is the most commonly torn rotator cuff tendon (critical zone)",
                "Hill-Sachs + Bankart lesion = anterior shoulder instability",
                "SLAP tear: superior labrum anterior to posterior; MR arthrogram is gold standard",
                "Acromiohumeral distance <7 mm suggests chronic massive rotator cuff tear",
                "Fatty infiltration of cuff muscles (Goutallier classification) affects surgical prognosis",
            ],
            &[
                "Defined by Goutallier D et al. Clin Orthop. Fatty degeneration. 1994.",
                "ACR Appropriateness Criteria - Shoulder Pain.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let entries = builtin_radiology();
        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_every_category_is_populated() {
        let entries = builtin_radiology();
        for category in RadiologyCategory::ALL {
            assert!(
                entries.iter().any(|e| e.category == category),
                "no entries for {}",
                category
            );
        }
    }

    #[test]
    fn test_entries_have_findings_and_pearls() {
        for entry in builtin_radiology() {
            assert!(!entry.name.is_empty());
            assert!(!entry.abnormal_findings.is_empty(), "{}", entry.id);
            assert!(!entry.key_pearls.is_empty(), "{}", entry.id);
        }
    }
}
