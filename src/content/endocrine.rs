//! Endocrine anatomy: one topic per gland, plus the HPA axis pathway.

use crate::domain::{
    Citation, CitationType, ClinicalRelevance, ContentStatus, ContentTags, ContentType,
    CrossReference, EducationalContent, ExamRelevance, KeyTerm, MediaAsset, MediaType,
    Relationship,
};

use super::level;

pub const ADRENAL_CORTEX_ID: &str = "anatomy-adrenal-cortex";
pub const ADRENAL_MEDULLA_ID: &str = "anatomy-adrenal-medulla";
pub const THYROID_GLAND_ID: &str = "anatomy-thyroid-gland";
pub const PITUITARY_GLAND_ID: &str = "anatomy-pituitary-gland";
pub const HPA_AXIS_ID: &str = "pathway-hpa-axis";

/// Gland anatomy index: topic id -> display name
pub const ENDOCRINE_ANATOMY_CONTENT: &[(&str, &str)] = &[
    (ADRENAL_CORTEX_ID, "Adrenal Cortex"),
    (ADRENAL_MEDULLA_ID, "Adrenal Medulla"),
    (THYROID_GLAND_ID, "Thyroid Gland"),
    (PITUITARY_GLAND_ID, "Pituitary Gland"),
];

fn endocrine_tags(
    structures: &[&str],
    keywords: &[&str],
    relevance: ClinicalRelevance,
) -> ContentTags {
    ContentTags {
        systems: vec!["endocrine".to_string()],
        structures: structures.iter().map(|s| s.to_string()).collect(),
        topics: vec!["anatomy".to_string(), "physiology".to_string()],
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        clinical_relevance: relevance,
        exam_relevance: ExamRelevance {
            usmle: true,
            nbme: true,
            shelf: vec!["medicine".to_string(), "pediatrics".to_string()],
        },
    }
}

fn guyton_hall(chapter: &str) -> Citation {
    Citation::new(
        "guyton-hall-14e",
        CitationType::Textbook,
        "Guyton and Hall Textbook of Medical Physiology, 14th ed.",
        "Elsevier",
    )
    .with_authors(&["Hall JE", "Hall ME"])
    .with_chapter(chapter)
}

fn gray_anatomy() -> Citation {
    Citation::new(
        "grays-anatomy-42e",
        CitationType::Textbook,
        "Gray's Anatomy: The Anatomical Basis of Clinical Practice, 42nd ed.",
        "Elsevier",
    )
    .with_authors(&["Standring S"])
}

pub fn adrenal_cortex_anatomy() -> EducationalContent {
    EducationalContent::new(ADRENAL_CORTEX_ID, ContentType::Structure, "Adrenal Cortex")
        .with_name_es("Corteza suprarrenal")
        .with_alternate_names(&["Suprarenal cortex", "Cortex glandulae suprarenalis"])
        .with_level(
            level(
                1,
                "The adrenal cortex is the outer layer of the small glands sitting on top of each kidney, and it makes hormones that help you handle stress, salt, and sugar.",
                "On top of each kidney sits a small gland shaped like a little hat. Its outer layer, the cortex, makes chemical messengers called hormones. One of them, cortisol, helps your body cope when you are stressed or sick.",
            )
            .with_term("hormone", "A chemical messenger made in one part of the body that travels in the blood to act somewhere else")
            .with_term("cortisol", "The main stress hormone made by the adrenal cortex")
            .with_analogy("The adrenal cortex is like a pharmacy on top of each kidney that fills orders for stress, salt, and sugar medicines whenever the brain calls in a prescription."),
        )
        .with_level(
            level(
                2,
                "The adrenal cortex has three zones that each make a different family of steroid hormones: salt-regulating, stress, and sex hormones.",
                "The cortex is arranged in three layers. The outer zone makes aldosterone, which tells the kidney to hold on to salt and water. The middle zone makes cortisol, which raises blood sugar and calms inflammation. The inner zone makes weak male-type hormones (androgens). All three are steroids built from cholesterol, so the gland is rich in fat droplets and looks yellow.",
            )
            .with_term("aldosterone", "Hormone that makes the kidney retain sodium and excrete potassium")
            .with_term("androgen", "A hormone with masculinizing effects, such as DHEA")
            .with_term("steroid", "A hormone built on the four-ring cholesterol skeleton")
            .with_analogy("Think of the three zones as three kitchens in one restaurant: same raw ingredient (cholesterol), three different menus."),
        )
        .with_level(
            level(
                3,
                "Zona glomerulosa, fasciculata, and reticularis produce mineralocorticoids, glucocorticoids, and androgens respectively, under control of angiotensin II/potassium and ACTH.",
                "Histologically the zona glomerulosa forms rounded clusters beneath the capsule and lacks 17-alpha-hydroxylase, so it makes aldosterone under angiotensin II and serum potassium control. The zona fasciculata is the thickest zone; its cords of lipid-laden cells secrete cortisol in response to ACTH with a diurnal rhythm peaking in the early morning. The zona reticularis secretes DHEA and androstenedione, also ACTH-dependent. Arterial supply comes from the superior, middle, and inferior suprarenal arteries, draining via a single suprarenal vein: into the IVC on the right and the left renal vein on the left.",
            )
            .with_key_term(
                KeyTerm::new(
                    "ACTH",
                    "Adrenocorticotropic hormone from the anterior pituitary that drives cortisol and adrenal androgen synthesis",
                )
                .with_pronunciation("A-C-T-H"),
            )
            .with_term("zona glomerulosa", "Outermost cortical zone producing aldosterone")
            .with_term("zona fasciculata", "Middle, thickest cortical zone producing cortisol")
            .with_term("zona reticularis", "Innermost cortical zone producing adrenal androgens")
            .with_clinical_notes("The right suprarenal vein is short and drains directly into the IVC, which makes right adrenal vein sampling technically harder than the left."),
        )
        .with_level(
            level(
                4,
                "Steroidogenesis depends on StAR-mediated cholesterol transport and zone-specific cytochrome P450 enzyme expression; enzyme defects produce the congenital adrenal hyperplasias.",
                "The rate-limiting step in all zones is transfer of cholesterol to the inner mitochondrial membrane by StAR, followed by side-chain cleavage (CYP11A1) to pregnenolone. Zonal identity follows enzyme expression: CYP11B2 (aldosterone synthase) is restricted to the glomerulosa, while CYP17A1 with both hydroxylase and lyase activity defines the fasciculata and reticularis. 21-hydroxylase (CYP21A2) deficiency, the most common form of congenital adrenal hyperplasia, diverts precursors into androgens, causing virilization and, in the classic salt-wasting form, hyponatremia with hyperkalemia. Loss of cortisol feedback raises ACTH and produces bilateral hyperplasia. 11-beta-hydroxylase deficiency instead causes hypertension because 11-deoxycorticosterone accumulates and acts as a mineralocorticoid.",
            )
            .with_term("StAR", "Steroidogenic acute regulatory protein that moves cholesterol into mitochondria")
            .with_term("CYP21A2", "Gene encoding 21-hydroxylase; mutated in most congenital adrenal hyperplasia")
            .with_term("11-deoxycorticosterone", "Mineralocorticoid precursor that accumulates in 11-beta-hydroxylase deficiency")
            .with_clinical_notes("Newborn screening measures 17-hydroxyprogesterone; elevated levels suggest 21-hydroxylase deficiency and warrant urgent electrolyte monitoring."),
        )
        .with_level(
            level(
                5,
                "Adrenocortical pathology spans autonomous hormone excess (Cushing syndrome, primary aldosteronism), insufficiency (Addison disease), and neoplasia, with management guided by biochemical phenotyping, lateralization, and molecular profiling.",
                "Primary aldosteronism is the most common curable cause of secondary hypertension; somatic KCNJ5, CACNA1D, and ATP1A1 mutations drive aldosterone-producing adenomas, and adrenal vein sampling lateralizes unilateral disease before adrenalectomy. ACTH-independent Cushing syndrome arises from cortisol-secreting adenomas (often PRKACA-mutant) or bilateral macronodular hyperplasia (ARMC5). Adrenocortical carcinoma is rare and aggressive; TP53 and CTNNB1 alterations and high Ki-67 predict poor outcome, and mitotane is the only approved adrenolytic agent. Primary adrenal insufficiency, most often autoimmune against 21-hydroxylase, requires lifelong glucocorticoid and mineralocorticoid replacement with stress-dose education. Incidentalomas above 4 cm, with unenhanced CT attenuation above 10 HU or delayed washout, need evaluation for malignancy, and every incidentaloma needs hormonal screening.",
            )
            .with_term("adrenal vein sampling", "Catheter measurement of aldosterone/cortisol ratios from each adrenal vein to lateralize hormone excess")
            .with_term("mitotane", "Adrenolytic drug used in adrenocortical carcinoma")
            .with_term("incidentaloma", "An adrenal mass discovered on imaging performed for another reason")
            .with_clinical_notes("Patients on long-term glucocorticoids need stress dosing during surgery or acute illness to prevent adrenal crisis."),
        )
        .with_media(MediaAsset {
            id: "adrenal-cortex-zones".to_string(),
            media_type: MediaType::Diagram,
            filename: "adrenal-cortex-zonation.svg".to_string(),
            title: "Zonation of the Adrenal Cortex".to_string(),
            description: Some(
                "Capsule-to-medulla cross-section with hormone products per zone".to_string(),
            ),
        })
        .with_citation(guyton_hall("Adrenocortical Hormones"))
        .with_citation(gray_anatomy())
        .with_cross_reference(CrossReference::new(
            "system-endocrine",
            ContentType::System,
            Relationship::Parent,
            "Endocrine System",
        ))
        .with_cross_reference(CrossReference::new(
            ADRENAL_MEDULLA_ID,
            ContentType::Structure,
            Relationship::Sibling,
            "Adrenal Medulla",
        ))
        .with_cross_reference(CrossReference::new(
            HPA_AXIS_ID,
            ContentType::Pathway,
            Relationship::Related,
            "Hypothalamic-Pituitary-Adrenal Axis",
        ))
        .with_cross_reference(CrossReference::new(
            "condition-cushing-syndrome",
            ContentType::Condition,
            Relationship::Related,
            "Cushing Syndrome",
        ))
        .with_tags(endocrine_tags(
            &["adrenal gland", "kidney"],
            &["cortisol", "aldosterone", "ACTH", "congenital adrenal hyperplasia", "incidentaloma"],
            ClinicalRelevance::Critical,
        ))
        .with_status(ContentStatus::Published)
        .with_contributor("Endocrine content team")
        .authored_on(2026, 1, 30)
}

pub fn adrenal_medulla_anatomy() -> EducationalContent {
    EducationalContent::new(ADRENAL_MEDULLA_ID, ContentType::Structure, "Adrenal Medulla")
        .with_name_es("Medula suprarrenal")
        .with_alternate_names(&["Suprarenal medulla"])
        .with_level(
            level(
                1,
                "The adrenal medulla is the center of each adrenal gland and releases adrenaline, the hormone behind the racing heart you feel when you are scared.",
                "Inside each adrenal gland is a soft core called the medulla. When you get a fright, your nerves tell it to squirt adrenaline into the blood. Your heart beats faster and you breathe quicker so you can run or react.",
            )
            .with_term("adrenaline", "A hormone that prepares your body for sudden action")
            .with_analogy("The medulla is the body's fire alarm: when it goes off, every system switches into emergency mode at once."),
        )
        .with_level(
            level(
                2,
                "The adrenal medulla is part of the sympathetic nervous system and secretes epinephrine and norepinephrine directly into the bloodstream.",
                "Unlike the cortex, the medulla behaves like a nerve ganglion. Nerve fibers from the spinal cord reach it directly and trigger release of catecholamines, mostly epinephrine with some norepinephrine. These hormones raise heart rate and blood pressure, open the airways, and release stored sugar. Because they go straight into the blood, their effects reach the whole body within seconds.",
            )
            .with_term("catecholamine", "Family of hormones and neurotransmitters including epinephrine, norepinephrine, and dopamine")
            .with_term("sympathetic nervous system", "The 'fight or flight' branch of the autonomic nervous system"),
        )
        .with_level(
            level(
                3,
                "Chromaffin cells of the medulla are modified postganglionic sympathetic neurons innervated by preganglionic splanchnic fibers releasing acetylcholine onto nicotinic receptors.",
                "The medulla derives from neural crest cells that migrate into the developing cortex. Chromaffin cells stain brown with chromium salts because of oxidized catecholamines stored in dense-core granules. Preganglionic fibers from the greater splanchnic nerves (T5-T9) synapse directly on chromaffin cells, which therefore act as postganglionic neurons without axons. Cortisol arriving through the corticomedullary portal circulation induces PNMT, the enzyme converting norepinephrine to epinephrine, explaining why about 80% of medullary output is epinephrine.",
            )
            .with_term("chromaffin cell", "Neural crest-derived cell of the adrenal medulla that stores and secretes catecholamines")
            .with_term("PNMT", "Phenylethanolamine N-methyltransferase, converts norepinephrine to epinephrine")
            .with_term("neural crest", "Embryonic cell population that gives rise to peripheral neurons and the adrenal medulla")
            .with_clinical_notes("Extra-adrenal sympathetic tissue lacks high local cortisol, so paragangliomas usually secrete norepinephrine rather than epinephrine."),
        )
        .with_level(
            level(
                4,
                "Catecholamine synthesis runs tyrosine -> L-DOPA -> dopamine -> norepinephrine -> epinephrine, with tyrosine hydroxylase rate-limiting and metabolism via COMT and MAO to metanephrines and VMA.",
                "Tyrosine hydroxylase, regulated by feedback inhibition and phosphorylation on nerve stimulation, is the rate-limiting step. Dopamine is transported into granules by VMAT and hydroxylated by dopamine beta-hydroxylase; norepinephrine then leaves the granule for cytosolic methylation by PNMT and re-enters storage. Exocytosis is calcium-dependent after nicotinic depolarization. Circulating catecholamines have half-lives of minutes; COMT in the chromaffin cells continuously produces free metanephrines independent of episodic release, which is why plasma free metanephrines are the most sensitive test for catecholamine-secreting tumors. MAO and COMT together yield vanillylmandelic acid excreted in urine.",
            )
            .with_term("tyrosine hydroxylase", "Rate-limiting enzyme of catecholamine synthesis")
            .with_term("metanephrine", "O-methylated catecholamine metabolite produced by COMT")
            .with_term("VMAT", "Vesicular monoamine transporter loading catecholamines into storage granules")
            .with_clinical_notes("Tricyclic antidepressants and MAO inhibitors can falsely elevate metanephrine results; review medications before testing."),
        )
        .with_level(
            level(
                5,
                "Pheochromocytoma and paraganglioma management integrates biochemical phenotype, functional imaging, and germline genetics, with up to 40% of cases hereditary.",
                "Roughly 40% of pheochromocytomas and paragangliomas carry a germline mutation, so every patient should be offered genetic testing. Cluster 1 tumors (SDHx, VHL, EPAS1) are pseudohypoxic, often noradrenergic or dopaminergic, and SDHB carries the highest metastatic risk. Cluster 2 tumors (RET, NF1, TMEM127, MAX) signal through kinase pathways and are typically adrenergic. Functional imaging is chosen by genotype: 68Ga-DOTATATE PET for SDHx-related disease and 18F-DOPA PET for adrenergic tumors. Preoperative alpha-blockade for 7 to 14 days followed by beta-blockade, with volume expansion, prevents intraoperative hypertensive crisis. Metastatic disease may respond to 131I-MIBG therapy, peptide receptor radionuclide therapy, or sunitinib.",
            )
            .with_term("paraganglioma", "Extra-adrenal catecholamine-secreting tumor of sympathetic or parasympathetic paraganglia")
            .with_term("SDHB", "Succinate dehydrogenase subunit B; germline mutations confer high metastatic risk")
            .with_term("alpha-blockade", "Preoperative phenoxybenzamine or doxazosin to control catecholamine-driven hypertension")
            .with_clinical_notes("Never start a beta-blocker before alpha-blockade in suspected pheochromocytoma: unopposed alpha stimulation can precipitate hypertensive crisis."),
        )
        .with_citation(guyton_hall("The Autonomic Nervous System and the Adrenal Medulla"))
        .with_citation(
            Citation::new(
                "lenders-2014-endocrine-society",
                CitationType::Guideline,
                "Pheochromocytoma and Paraganglioma: An Endocrine Society Clinical Practice Guideline",
                "Journal of Clinical Endocrinology & Metabolism",
            )
            .with_authors(&["Lenders JW", "Duh QY", "Eisenhofer G", "et al."])
            .with_url("https://doi.org/10.1210/jc.2014-1498"),
        )
        .with_cross_reference(CrossReference::new(
            "system-endocrine",
            ContentType::System,
            Relationship::Parent,
            "Endocrine System",
        ))
        .with_cross_reference(CrossReference::new(
            ADRENAL_CORTEX_ID,
            ContentType::Structure,
            Relationship::Sibling,
            "Adrenal Cortex",
        ))
        .with_cross_reference(CrossReference::new(
            "condition-pheochromocytoma",
            ContentType::Condition,
            Relationship::Related,
            "Pheochromocytoma",
        ))
        .with_tags(endocrine_tags(
            &["adrenal gland"],
            &["epinephrine", "norepinephrine", "chromaffin", "metanephrines", "pheochromocytoma"],
            ClinicalRelevance::High,
        ))
        .with_status(ContentStatus::Published)
        .with_contributor("Endocrine content team")
        .authored_on(2026, 1, 30)
}

pub fn thyroid_gland_anatomy() -> EducationalContent {
    EducationalContent::new(THYROID_GLAND_ID, ContentType::Structure, "Thyroid Gland")
        .with_name_es("Glandula tiroides")
        .with_alternate_names(&["Glandula thyroidea"])
        .with_level(
            level(
                1,
                "The thyroid is a butterfly-shaped gland in the front of your neck that sets how fast your body uses energy.",
                "Below your Adam's apple is a gland shaped like a butterfly. It makes thyroid hormone, which works like a speed dial for your body. Too much and you feel hot and jittery; too little and you feel tired and cold.",
            )
            .with_term("thyroid hormone", "A hormone that controls how quickly the body burns energy")
            .with_analogy("The thyroid is the thermostat of the body: it sets how warm the engine runs."),
        )
        .with_level(
            level(
                2,
                "The thyroid uses iodine from food to make T4 and T3, hormones that regulate metabolism, heart rate, and growth.",
                "The gland has two lobes joined by a narrow isthmus in front of the trachea. It traps iodine from the blood and builds it into thyroxine (T4) and the more active triiodothyronine (T3). These hormones raise the metabolic rate of almost every tissue, speed up the heart, and are essential for normal brain development in children. Special C cells in the thyroid also make calcitonin, which lowers blood calcium.",
            )
            .with_term("T4", "Thyroxine, the main hormone secreted by the thyroid")
            .with_term("T3", "Triiodothyronine, the active form of thyroid hormone")
            .with_term("isthmus", "The band of thyroid tissue connecting the two lobes"),
        )
        .with_level(
            level(
                3,
                "Thyroid follicles store thyroglobulin-bound hormone in colloid; the gland is supplied by superior and inferior thyroid arteries and lies in close relation to the recurrent laryngeal nerves and parathyroids.",
                "The functional unit is the follicle: a ring of cuboidal follicular cells surrounding colloid rich in thyroglobulin. TSH from the anterior pituitary stimulates iodide uptake via the sodium-iodide symporter, organification by thyroid peroxidase, and endocytosis of colloid for hormone release. Parafollicular C cells lie between follicles. The superior thyroid artery arises from the external carotid and travels with the external branch of the superior laryngeal nerve; the inferior thyroid artery from the thyrocervical trunk crosses the recurrent laryngeal nerve. Four parathyroid glands usually sit on the posterior lobes.",
            )
            .with_term("follicle", "Spherical unit of follicular cells surrounding colloid")
            .with_term("thyroid peroxidase", "Enzyme that oxidizes iodide and couples iodotyrosines")
            .with_term("recurrent laryngeal nerve", "Branch of the vagus supplying intrinsic laryngeal muscles; at risk in thyroidectomy")
            .with_clinical_notes("Hoarseness after thyroidectomy suggests recurrent laryngeal nerve injury; perioral tingling suggests parathyroid injury with hypocalcemia."),
        )
        .with_level(
            level(
                4,
                "Thyroid hormone action depends on peripheral deiodination and nuclear receptor signaling, with the HPT axis maintaining a log-linear inverse relationship between TSH and free T4.",
                "Only about 20% of circulating T3 is secreted directly; the rest comes from T4 by type 1 and type 2 deiodinases, while type 3 deiodinase inactivates both hormones to reverse T3. Free hormone enters cells through MCT8 and binds thyroid hormone receptors alpha and beta, which heterodimerize with RXR on thyroid response elements to regulate transcription. Pituitary TSH secretion falls log-linearly as free T4 rises, so small changes in free T4 produce large TSH shifts, making TSH the most sensitive screening test. Wolff-Chaikoff effect: high iodide transiently blocks organification, protecting against iodine load. MCT8 mutations cause Allan-Herndon-Dudley syndrome with severe neurodevelopmental impairment.",
            )
            .with_term("deiodinase", "Selenoenzyme activating or inactivating thyroid hormone by removing iodine")
            .with_term("Wolff-Chaikoff effect", "Transient inhibition of thyroid hormone synthesis by excess iodide")
            .with_term("MCT8", "Monocarboxylate transporter 8, a thyroid hormone transporter")
            .with_clinical_notes("In critical illness, low T3 with normal TSH reflects altered deiodination (euthyroid sick syndrome) and should not be treated with thyroid hormone."),
        )
        .with_level(
            level(
                5,
                "Thyroid nodule and cancer management follows ultrasound risk stratification, cytology, and molecular testing, while autoimmune thyroid disease therapy targets hormone levels, immune mechanisms, and orbitopathy.",
                "ACR TI-RADS scores composition, echogenicity, shape, margin, and echogenic foci to decide fine-needle aspiration thresholds. Bethesda III and IV cytology may be refined by molecular panels detecting BRAF V600E, RAS, and TERT promoter mutations or gene-expression classifiers. Papillary carcinoma dominates and has an excellent prognosis; radioactive iodine is reserved by ATA risk category. Medullary carcinoma arises from C cells, secretes calcitonin and CEA, and in MEN2 is driven by germline RET mutations warranting prophylactic thyroidectomy timed by codon risk. In Graves disease, TSH receptor antibodies drive hyperthyroidism and orbitopathy; teprotumumab, an IGF-1 receptor antibody, reduces proptosis in active orbitopathy. Hashimoto thyroiditis with anti-TPO antibodies is the leading cause of hypothyroidism in iodine-sufficient regions.",
            )
            .with_term("TI-RADS", "Ultrasound risk stratification system for thyroid nodules")
            .with_term("Bethesda system", "Six-category reporting system for thyroid cytopathology")
            .with_term("teprotumumab", "IGF-1 receptor monoclonal antibody for thyroid eye disease")
            .with_clinical_notes("Measure calcitonin and screen for pheochromocytoma before surgery in any patient with medullary thyroid carcinoma."),
        )
        .with_media(MediaAsset {
            id: "thyroid-neck-relations".to_string(),
            media_type: MediaType::Image,
            filename: "thyroid-anterior-neck.png".to_string(),
            title: "Thyroid Gland and Neck Relations".to_string(),
            description: None,
        })
        .with_citation(guyton_hall("Thyroid Metabolic Hormones"))
        .with_citation(gray_anatomy())
        .with_cross_reference(CrossReference::new(
            "system-endocrine",
            ContentType::System,
            Relationship::Parent,
            "Endocrine System",
        ))
        .with_cross_reference(CrossReference::new(
            PITUITARY_GLAND_ID,
            ContentType::Structure,
            Relationship::Related,
            "Pituitary Gland (TSH)",
        ))
        .with_cross_reference(CrossReference::new(
            "condition-graves-disease",
            ContentType::Condition,
            Relationship::Related,
            "Graves Disease",
        ))
        .with_tags(endocrine_tags(
            &["thyroid gland", "parathyroid glands", "trachea"],
            &["TSH", "T4", "T3", "thyroglobulin", "TI-RADS", "recurrent laryngeal nerve"],
            ClinicalRelevance::Critical,
        ))
        .with_status(ContentStatus::Published)
        .with_contributor("Endocrine content team")
        .authored_on(2026, 1, 30)
}

pub fn pituitary_gland_anatomy() -> EducationalContent {
    EducationalContent::new(PITUITARY_GLAND_ID, ContentType::Structure, "Pituitary Gland")
        .with_name_es("Hipofisis")
        .with_alternate_names(&["Hypophysis", "Master gland"])
        .with_level(
            level(
                1,
                "The pituitary is a pea-sized gland under the brain that tells many other glands when to release their hormones.",
                "Just below your brain, behind your eyes, hangs a gland about the size of a pea. It is often called the master gland because it sends signals to the thyroid, the adrenal glands, and others, telling them how much hormone to make.",
            )
            .with_term("pituitary", "Small gland at the base of the brain that controls other glands")
            .with_analogy("The pituitary is like an orchestra conductor: it does not play every instrument, but it tells each section when to play."),
        )
        .with_level(
            level(
                2,
                "The pituitary has a front lobe that makes its own hormones and a back lobe that releases hormones made in the brain.",
                "The anterior pituitary makes growth hormone, prolactin, and the stimulating hormones for the thyroid (TSH), adrenal glands (ACTH), and gonads (LH and FSH). The posterior pituitary stores and releases two hormones made by the hypothalamus: antidiuretic hormone, which helps the kidneys save water, and oxytocin, which acts in childbirth and breastfeeding. The hypothalamus above it controls both lobes.",
            )
            .with_term("anterior pituitary", "Front lobe that synthesizes tropic hormones")
            .with_term("posterior pituitary", "Back lobe that releases ADH and oxytocin made in the hypothalamus")
            .with_term("hypothalamus", "Brain region that controls the pituitary"),
        )
        .with_level(
            level(
                3,
                "The pituitary sits in the sella turcica, connected to the hypothalamus by the infundibulum; the adenohypophysis is controlled via the hypophyseal portal system and the neurohypophysis by direct axonal projection.",
                "The adenohypophysis derives from Rathke's pouch (oral ectoderm), while the neurohypophysis is a downgrowth of the diencephalon. Hypothalamic releasing hormones (CRH, TRH, GnRH, GHRH) and dopamine travel through the long portal veins to the anterior lobe. Supraoptic and paraventricular neurons project axons down the stalk to the posterior lobe. The gland is bounded laterally by the cavernous sinuses containing the internal carotid artery and cranial nerves III, IV, V1, V2, and VI, and superiorly by the diaphragma sellae beneath the optic chiasm.",
            )
            .with_term("sella turcica", "Saddle-shaped depression of the sphenoid bone housing the pituitary")
            .with_term("hypophyseal portal system", "Capillary-to-capillary venous link carrying hypothalamic hormones to the anterior pituitary")
            .with_term("Rathke's pouch", "Embryonic outpouching of oral ectoderm forming the anterior pituitary")
            .with_clinical_notes("A pituitary macroadenoma compressing the optic chiasm classically causes bitemporal hemianopia."),
        )
        .with_level(
            level(
                4,
                "Each anterior pituitary axis is governed by hypothalamic drive, pulsatility, and negative feedback; prolactin is unique in being tonically inhibited by dopamine.",
                "Pulsatile GnRH stimulates LH and FSH while continuous GnRH suppresses them, the basis for GnRH agonist therapy. Cortisol feeds back on CRH and ACTH; thyroid hormone on TRH and TSH; IGF-1 on GHRH and, via somatostatin, on GH. Because prolactin is restrained by dopamine, stalk compression from any sellar mass raises prolactin modestly (the stalk effect), whereas prolactinomas usually exceed 200 ng/mL. Somatotroph, lactotroph, and thyrotroph lineages depend on the transcription factor PIT1; corticotrophs on TPIT; gonadotrophs on SF1, and this lineage now frames tumor classification. Pituitary apoplexy, hemorrhage into an adenoma, presents with sudden headache, ophthalmoplegia, and acute adrenal insufficiency.",
            )
            .with_term("stalk effect", "Mild hyperprolactinemia from interrupted dopamine delivery")
            .with_term("PIT1", "Transcription factor defining somatotroph, lactotroph, and thyrotroph lineages")
            .with_term("pituitary apoplexy", "Acute hemorrhage or infarction of a pituitary tumor")
            .with_clinical_notes("Give stress-dose hydrocortisone immediately in suspected pituitary apoplexy; do not wait for imaging."),
        )
        .with_level(
            level(
                5,
                "Pituitary neuroendocrine tumor management is lineage- and function-specific: dopamine agonists for prolactinomas, transsphenoidal surgery for most others, and somatostatin analogs, pegvisomant, or steroidogenesis inhibitors for persistent hormone excess.",
                "The WHO 2022 classification renames adenomas as pituitary neuroendocrine tumors (PitNETs) classified by transcription factor lineage. Cabergoline normalizes prolactin and shrinks most prolactinomas; surgery is reserved for intolerance or resistance. Acromegaly is treated with endoscopic transsphenoidal resection, then first-generation somatostatin receptor ligands, pasireotide, or the GH receptor antagonist pegvisomant. Cushing disease is confirmed by inferior petrosal sinus sampling when imaging is equivocal; persistent disease may need osilodrostat, metyrapone, pasireotide, or bilateral adrenalectomy with risk of corticotroph tumor progression. Aggressive PitNETs resistant to standard therapy respond to temozolomide, particularly when MGMT expression is low. Post-operative diabetes insipidus and SIADH in a triphasic pattern require careful sodium monitoring.",
            )
            .with_term("PitNET", "Pituitary neuroendocrine tumor, current WHO terminology for adenoma")
            .with_term("inferior petrosal sinus sampling", "Bilateral venous sampling with CRH stimulation to confirm a pituitary ACTH source")
            .with_term("pegvisomant", "Growth hormone receptor antagonist used in acromegaly")
            .with_clinical_notes("Monitor serum sodium daily for two weeks after transsphenoidal surgery: the triphasic response can swing from diabetes insipidus to SIADH."),
        )
        .with_citation(guyton_hall("Pituitary Hormones and Their Control by the Hypothalamus"))
        .with_cross_reference(CrossReference::new(
            "system-endocrine",
            ContentType::System,
            Relationship::Parent,
            "Endocrine System",
        ))
        .with_cross_reference(CrossReference::new(
            HPA_AXIS_ID,
            ContentType::Pathway,
            Relationship::Related,
            "Hypothalamic-Pituitary-Adrenal Axis",
        ))
        .with_cross_reference(CrossReference::new(
            THYROID_GLAND_ID,
            ContentType::Structure,
            Relationship::Related,
            "Thyroid Gland",
        ))
        .with_cross_reference(CrossReference::new(
            ADRENAL_CORTEX_ID,
            ContentType::Structure,
            Relationship::Related,
            "Adrenal Cortex",
        ))
        .with_tags(endocrine_tags(
            &["pituitary gland", "hypothalamus", "sella turcica", "optic chiasm"],
            &["ACTH", "TSH", "prolactin", "growth hormone", "PitNET", "bitemporal hemianopia"],
            ClinicalRelevance::High,
        ))
        .with_status(ContentStatus::Published)
        .with_contributor("Endocrine content team")
        .authored_on(2026, 1, 30)
}

pub fn hpa_axis_pathway() -> EducationalContent {
    EducationalContent::new(
        HPA_AXIS_ID,
        ContentType::Pathway,
        "Hypothalamic-Pituitary-Adrenal Axis",
    )
    .with_name_es("Eje hipotalamo-hipofisis-suprarrenal")
    .with_alternate_names(&["HPA axis", "Stress axis"])
    .with_level(
        level(
            1,
            "The HPA axis is the chain of messages from your brain to your adrenal glands that controls your stress response.",
            "When you are stressed, a part of your brain sends a message to the pituitary gland. The pituitary then signals the adrenal glands to release cortisol, which helps your body deal with the stress and then tells the brain to calm down.",
        )
        .with_term("stress response", "The body's coordinated reaction to a physical or emotional challenge")
        .with_analogy("The HPA axis works like a relay race: the hypothalamus passes the baton to the pituitary, which passes it to the adrenal glands."),
    )
    .with_level(
        level(
            2,
            "The hypothalamus releases CRH, which makes the pituitary release ACTH, which makes the adrenal cortex release cortisol; cortisol then switches the signal off.",
            "This three-step chain is a classic negative feedback loop. Corticotropin-releasing hormone (CRH) from the hypothalamus stimulates ACTH from the anterior pituitary. ACTH travels in the blood to the adrenal cortex and triggers cortisol release. Rising cortisol acts back on the hypothalamus and pituitary to reduce CRH and ACTH, so levels stay within a healthy range. Cortisol is naturally highest in the early morning and lowest around midnight.",
        )
        .with_term("CRH", "Corticotropin-releasing hormone from the hypothalamus")
        .with_term("negative feedback", "A control loop in which the output suppresses its own production"),
    )
    .with_level(
        level(
            3,
            "HPA output follows a circadian rhythm entrained by the suprachiasmatic nucleus, with pulsatile ACTH release, and dynamic testing exploits the feedback loop to localize disease.",
            "Parvocellular neurons of the paraventricular nucleus secrete CRH and vasopressin into the portal circulation, both of which stimulate corticotroph POMC cleavage to ACTH. Cortisol peaks 30 to 45 minutes after waking (the cortisol awakening response). Low-dose dexamethasone fails to suppress cortisol in Cushing syndrome of any cause; high-dose suppression and CRH stimulation help distinguish pituitary from ectopic ACTH sources. In primary adrenal failure ACTH is high; in secondary (pituitary) failure ACTH is low or inappropriately normal, and mineralocorticoid function is preserved because aldosterone depends mainly on angiotensin II.",
        )
        .with_term("POMC", "Pro-opiomelanocortin, the precursor cleaved into ACTH and MSH")
        .with_term("dexamethasone suppression test", "Test of feedback integrity using a potent synthetic glucocorticoid")
        .with_term("paraventricular nucleus", "Hypothalamic nucleus producing CRH and vasopressin")
        .with_clinical_notes("Hyperpigmentation points to primary adrenal insufficiency because elevated ACTH shares its POMC precursor with MSH."),
    )
    .with_level(
        level(
            4,
            "Glucocorticoid signaling acts through mineralocorticoid and glucocorticoid receptors with distinct affinities, and tissue-level exposure is gated by 11-beta-HSD isoenzymes.",
            "High-affinity mineralocorticoid receptors in the hippocampus are occupied at basal cortisol levels, while lower-affinity glucocorticoid receptors engage at stress or circadian peak levels and mediate negative feedback. In the kidney, 11-beta-HSD2 inactivates cortisol to cortisone so that aldosterone can access the mineralocorticoid receptor; licorice (glycyrrhetinic acid) inhibits this enzyme, causing apparent mineralocorticoid excess. 11-beta-HSD1 regenerates cortisol in liver and adipose tissue, amplifying local glucocorticoid action. Chronic stress, critical illness, and exogenous steroids all remodel axis set points, and prolonged exogenous glucocorticoid exposure atrophies corticotrophs and the zona fasciculata, so recovery after withdrawal can take months.",
        )
        .with_term("11-beta-HSD2", "Renal enzyme inactivating cortisol to protect the mineralocorticoid receptor")
        .with_term("glucocorticoid receptor", "Nuclear receptor mediating most cortisol effects and feedback")
        .with_term("apparent mineralocorticoid excess", "Hypertension and hypokalemia from cortisol activating renal MR")
        .with_clinical_notes("Taper glucocorticoids given for more than three weeks; abrupt cessation risks adrenal crisis from suppressed HPA function."),
    )
    .with_level(
        level(
            5,
            "HPA axis dysregulation links endocrine disease, critical illness, and psychiatry; evaluation integrates dynamic testing, assay limitations, and pharmacologic effects on cortisol-binding globulin and metabolism.",
            "Critical illness-related corticosteroid insufficiency reflects reduced cortisol clearance, tissue resistance, and suppressed ACTH rather than simple adrenal failure; hydrocortisone in septic shock shortens vasopressor duration. Oral estrogens raise cortisol-binding globulin and falsely elevate total cortisol, while nephrotic syndrome and cirrhosis lower it; salivary or free cortisol avoids these pitfalls. Late-night salivary cortisol, 24-hour urinary free cortisol, and the 1 mg dexamethasone test screen for Cushing syndrome, and CYP3A4 inducers such as rifampin accelerate dexamethasone clearance, causing false non-suppression. Melancholic depression shows HPA hyperactivity with blunted feedback, and glucocorticoid receptor antagonists such as mifepristone treat hyperglycemia in Cushing syndrome. Cosyntropin stimulation may be falsely normal within weeks of pituitary injury before adrenal atrophy develops.",
        )
        .with_term("CIRCI", "Critical illness-related corticosteroid insufficiency")
        .with_term("cortisol-binding globulin", "Plasma protein carrying most circulating cortisol")
        .with_term("cosyntropin", "Synthetic ACTH 1-24 used for the stimulation test")
        .with_clinical_notes("A normal cosyntropin test does not exclude recent-onset secondary adrenal insufficiency; use clinical judgment after pituitary surgery."),
    )
    .with_citation(guyton_hall("Adrenocortical Hormones"))
    .with_citation(
        Citation::new(
            "nieman-2008-cushing",
            CitationType::Guideline,
            "The Diagnosis of Cushing's Syndrome: An Endocrine Society Clinical Practice Guideline",
            "Journal of Clinical Endocrinology & Metabolism",
        )
        .with_authors(&["Nieman LK", "Biller BM", "Findling JW", "et al."]),
    )
    .with_cross_reference(CrossReference::new(
        PITUITARY_GLAND_ID,
        ContentType::Structure,
        Relationship::Child,
        "Pituitary Gland",
    ))
    .with_cross_reference(CrossReference::new(
        ADRENAL_CORTEX_ID,
        ContentType::Structure,
        Relationship::Child,
        "Adrenal Cortex",
    ))
    .with_cross_reference(CrossReference::new(
        "condition-cushing-syndrome",
        ContentType::Condition,
        Relationship::SeeAlso,
        "Cushing Syndrome",
    ))
    .with_tags(ContentTags {
        systems: vec!["endocrine".to_string(), "nervous".to_string()],
        structures: vec![
            "hypothalamus".to_string(),
            "pituitary gland".to_string(),
            "adrenal gland".to_string(),
        ],
        topics: vec!["physiology".to_string(), "feedback loops".to_string()],
        keywords: ["CRH", "ACTH", "cortisol", "dexamethasone", "negative feedback"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        clinical_relevance: ClinicalRelevance::Critical,
        exam_relevance: ExamRelevance {
            usmle: true,
            nbme: true,
            shelf: vec!["medicine".to_string(), "psychiatry".to_string()],
        },
    })
    .with_status(ContentStatus::Published)
    .with_contributor("Endocrine content team")
    .authored_on(2026, 2, 2)
}
